use axum::{
    routing::{get, post},
    Router,
};
use bl_core::{Error, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/state", get(handlers::get_state))
        .route("/api/tab", post(handlers::select_tab))
        .route("/api/input", post(handlers::set_input))
        .route("/api/presets", get(handlers::list_presets))
        .route("/api/presets/:index", post(handlers::choose_preset))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/samples", get(handlers::list_samples))
        .route("/api/classify/:score", get(handlers::classify_score))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(e.to_string()))
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use bl_core::{ArticleRecord, Error, Result};
}
