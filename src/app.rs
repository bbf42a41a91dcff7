use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/prize", get(handlers::get_prize))
        .with_state(state)
}
