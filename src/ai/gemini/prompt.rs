use super::client::GeminiHttpClient;
use super::types::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part, ResponseSchema, SchemaProperty,
};
use crate::ai::PromptService;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Document shape the response schema forces the model to emit.
#[derive(Debug, Deserialize)]
struct PromptDocument {
    prompt: String,
}

pub struct GeminiPromptClient {
    http: GeminiHttpClient,
}

impl GeminiPromptClient {
    pub fn new(model: String) -> Self {
        Self::new_with_client(model, reqwest::Client::new())
    }

    pub fn new_with_client(model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(model, client),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    fn build_request(details: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: details.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: ResponseSchema {
                    schema_type: "OBJECT".to_string(),
                    properties: BTreeMap::from([(
                        "prompt".to_string(),
                        SchemaProperty {
                            property_type: "STRING".to_string(),
                        },
                    )]),
                    required: vec!["prompt".to_string()],
                },
            },
        }
    }

    fn classify_failure(status: u16, body: String) -> Error {
        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => Error::UpstreamStatus {
                status,
                message: envelope.error.message,
            },
            Err(_) => Error::UpstreamStatusRaw { status, body },
        }
    }

    /// Walks `candidates[0].content.parts[0].text` out of the envelope.
    fn extract_part_text(envelope: &Value) -> Option<String> {
        let response: GenerateContentResponse = serde_json::from_value(envelope.clone()).ok()?;
        let candidate = response.candidates.into_iter().next()?;
        let part = candidate.content.parts.into_iter().next()?;
        Some(part.text)
    }

    /// Second parse pass: the generated text is itself a JSON document
    /// holding the `prompt` string.
    fn unwrap_prompt(envelope: Value) -> Result<String> {
        if let Some(text) = Self::extract_part_text(&envelope) {
            return match serde_json::from_str::<PromptDocument>(&text) {
                Ok(document) => Ok(document.prompt),
                Err(e) => {
                    tracing::error!("Gemini part text was not a structured prompt: {}", e);
                    Err(Error::PromptParse { raw_text: text })
                }
            };
        }

        if let Some(error) = envelope.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(Error::UpstreamMessage(message));
        }

        Err(Error::UnexpectedShape { raw: envelope })
    }
}

#[async_trait]
impl PromptService for GeminiPromptClient {
    async fn generate_prompt(&self, api_key: &str, details: &str) -> Result<String> {
        let request = Self::build_request(details);
        let (status, body) = self.http.generate_content(api_key, &request).await?;

        if status != 200 {
            tracing::error!("Gemini API error (status {}): {}", status, body);
            return Err(Self::classify_failure(status, body));
        }

        // A 200 body that is not JSON falls through the ladder as null.
        let envelope = serde_json::from_str::<Value>(&body).unwrap_or(Value::Null);
        Self::unwrap_prompt(envelope)
    }
}
