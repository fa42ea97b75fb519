pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::questions::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Question Generation API
        .route(
            "/api/v1/questions/generate",
            post(handlers::handle_generate_questions),
        )
        .with_state(state)
}
