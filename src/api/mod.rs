mod handlers;
mod models;

use axum::{routing::post, Router};

use crate::app::AppState;

pub use handlers::{generate_prompt, invalid_method, not_found};
pub use models::{ErrorResponse, GeneratePromptRequest, PromptResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/generate-prompt",
            post(generate_prompt).fallback(invalid_method),
        )
        .fallback(not_found)
        .with_state(state)
}
