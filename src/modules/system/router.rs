use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{health, render_metrics};

pub fn init_system_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
}
