use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bl_core::classifier::{classify, describe, Classification, Insight, INSIGHT_DIMENSIONS};
use bl_core::{sample_articles, ArticleRecord, MAX_SCORE, PRESET_LOCATORS};
use bl_inference::Submission;
use bl_store::{present, Action, ActiveTab, DashboardState, DashboardView};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: ActiveTab,
}

#[derive(Debug, Deserialize)]
pub struct InputRequest {
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub classification: Classification,
    pub insights: Vec<Insight>,
}

pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(present(&state.store().snapshot()))
}

pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<DashboardState> {
    Json(state.store().snapshot())
}

pub async fn select_tab(
    State(state): State<Arc<AppState>>,
    request: Result<Json<TabRequest>, JsonRejection>,
) -> Result<Json<DashboardView>, ApiError> {
    let Json(request) = request?;
    state.store().dispatch(Action::SelectTab(request.tab));
    Ok(get_dashboard(State(state)).await)
}

pub async fn set_input(
    State(state): State<Arc<AppState>>,
    request: Result<Json<InputRequest>, JsonRejection>,
) -> Result<Json<DashboardView>, ApiError> {
    let Json(request) = request?;
    state.store().dispatch(Action::SetInput(request.value));
    Ok(get_dashboard(State(state)).await)
}

pub async fn choose_preset(
    State(state): State<Arc<AppState>>,
    index: Result<Path<usize>, PathRejection>,
) -> Result<Json<DashboardView>, ApiError> {
    let Path(index) = index?;
    if index >= PRESET_LOCATORS.len() {
        return Err(ApiError::NotFound(format!("preset {}", index)));
    }
    state.store().dispatch(Action::ChoosePreset(index));
    Ok(get_dashboard(State(state)).await)
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    request: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // A bare POST analyzes whatever is already in the input.
    let request = match request {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => AnalyzeRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    if let Some(url) = request.url {
        state.store().dispatch(Action::SetInput(url));
    }

    let submission = state.session.spawn_submit();
    let status = match submission {
        Submission::Accepted { run_id } => {
            info!("🚀 Started analysis {}", run_id);
            StatusCode::ACCEPTED
        }
        Submission::Ignored { .. } => StatusCode::OK,
    };
    Ok((status, Json(submission)))
}

pub async fn list_samples() -> Json<&'static [ArticleRecord]> {
    Json(sample_articles())
}

pub async fn list_presets() -> Json<[&'static str; 4]> {
    Json(PRESET_LOCATORS)
}

pub async fn classify_score(
    score: Result<Path<u16>, PathRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Path(score) = score?;
    if score > u16::from(MAX_SCORE) {
        return Err(ApiError::InvalidInput(format!(
            "score {} is outside [0, {}]",
            score, MAX_SCORE
        )));
    }
    let score = score as u8;
    Ok(Json(ClassifyResponse {
        classification: classify(score),
        insights: INSIGHT_DIMENSIONS
            .iter()
            .filter_map(|&d| describe(d, score))
            .collect(),
    }))
}
