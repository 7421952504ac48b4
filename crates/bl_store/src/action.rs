use bl_core::{AnalysisStage, ArticleRecord, ProgressUpdate, PRESET_LOCATORS};
use uuid::Uuid;

use crate::state::{ActiveTab, AnalysisStatus, DashboardState};

/// Every change to [`DashboardState`] goes through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTab(ActiveTab),
    SetInput(String),
    ChoosePreset(usize),
    AnalysisStarted { run_id: Uuid },
    StageStarted(AnalysisStage),
    Progress(ProgressUpdate),
    AnalysisCompleted { record: ArticleRecord, response_time_ms: u32 },
    /// The run was dropped before it completed.
    AnalysisAbandoned { run_id: Uuid },
}

pub fn reduce(state: &mut DashboardState, action: Action) {
    match action {
        Action::SelectTab(tab) => state.active_tab = tab,
        // The input is locked while a run is in flight.
        Action::SetInput(value) => {
            if !state.is_analyzing() {
                state.input = value;
            }
        }
        Action::ChoosePreset(index) => {
            if let Some(locator) = PRESET_LOCATORS.get(index) {
                if !state.is_analyzing() {
                    state.input = locator.to_string();
                }
            }
        }
        Action::AnalysisStarted { run_id } => {
            state.status = AnalysisStatus::Analyzing;
            state.progress = 0;
            state.stage = None;
            state.run_id = Some(run_id);
        }
        Action::StageStarted(stage) => {
            if state.is_analyzing() {
                state.stage = Some(stage);
            }
        }
        Action::Progress(update) => {
            if state.is_analyzing() {
                state.progress = update.percent;
            }
        }
        Action::AnalysisCompleted { record, response_time_ms } => {
            state.live = Some(record);
            state.status = AnalysisStatus::Complete;
            state.stage = None;
            state.metrics.articles_processed += 1;
            state.metrics.avg_response_time_ms = response_time_ms;
        }
        Action::AnalysisAbandoned { run_id } => {
            if state.is_analyzing() && state.run_id == Some(run_id) {
                state.status = if state.live.is_some() {
                    AnalysisStatus::Complete
                } else {
                    AnalysisStatus::Idle
                };
                state.progress = 0;
                state.stage = None;
                state.run_id = None;
            }
        }
    }
}
