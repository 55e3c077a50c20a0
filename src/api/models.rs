use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Form fields accepted by `POST /generate-prompt`.
///
/// Both fields are optional at the decoding layer so that presence checks
/// stay in the handler and produce the contract error body.
#[derive(Debug, Default, Deserialize)]
pub struct GeneratePromptRequest {
    #[serde(default, rename = "apiKey")]
    pub api_key: Option<String>,
    #[serde(default, rename = "promptDetails")]
    pub prompt_details: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

/// Failure body. The raw fields carry upstream diagnostics for the two
/// malformed-response cases and are omitted otherwise.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_gemini_part_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<Value>,
}

impl ErrorResponse {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw_gemini_part_text: None,
            raw_response: None,
        }
    }
}
