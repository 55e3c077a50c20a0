use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::app::AppState;
use crate::Error;

use super::models::{ErrorResponse, GeneratePromptRequest, PromptResponse};

const MISSING_FIELDS: &str = "API key and prompt details are required.";
const INVALID_METHOD: &str = "Invalid request method.";

pub async fn generate_prompt(
    State(state): State<AppState>,
    payload: Result<Form<GeneratePromptRequest>, FormRejection>,
) -> Result<Json<PromptResponse>, (StatusCode, Json<ErrorResponse>)> {
    // An absent or undecodable body is the same as both fields missing.
    let fields = payload.map(|Form(fields)| fields).unwrap_or_default();

    let api_key = fields.api_key.as_deref().map(str::trim).unwrap_or_default();
    let prompt_details = fields
        .prompt_details
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();

    if api_key.is_empty() || prompt_details.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message(MISSING_FIELDS)),
        ));
    }

    debug!(
        "Relaying prompt generation request ({} chars of details)",
        prompt_details.len()
    );

    match state
        .prompt_service
        .generate_prompt(api_key, prompt_details)
        .await
    {
        Ok(prompt) => Ok(Json(PromptResponse { prompt })),
        Err(e) => {
            error!("Prompt relay failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, Json(error_body(e))))
        }
    }
}

fn error_body(error: Error) -> ErrorResponse {
    let message = error.to_string();
    match error {
        Error::PromptParse { raw_text } => ErrorResponse {
            error: message,
            raw_gemini_part_text: Some(raw_text),
            raw_response: None,
        },
        Error::UnexpectedShape { raw } => ErrorResponse {
            error: message,
            raw_gemini_part_text: None,
            raw_response: Some(raw),
        },
        _ => ErrorResponse::message(message),
    }
}

pub async fn invalid_method() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::message(INVALID_METHOD)),
    )
        .into_response()
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::message("Not found")),
    )
        .into_response()
}
