use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::render_page;

pub fn init_pages_router() -> Router<AppState> {
    Router::new().route("/{*path}", get(render_page))
}
