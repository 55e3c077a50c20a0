use crate::Result;
use reqwest::Client;
use serde::Serialize;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Lightweight Gemini REST client used by the prompt module.
///
/// Hands back the raw status and body so the caller owns response
/// classification. The API key is supplied per call and sent as the `key`
/// query parameter. No explicit timeout is applied; the call blocks until
/// the transport gives up on its own.
pub struct GeminiHttpClient {
    client: Client,
    model: String,
    base_url: String,
}

impl GeminiHttpClient {
    /// Construct a Gemini client.
    ///
    /// `model` should be the bare model ID (for example `gemini-2.0-flash`),
    /// not a `models/...`-prefixed path segment.
    pub fn new(model: String) -> Self {
        Self::new_with_client(model, Client::new())
    }

    pub fn new_with_client(model: String, client: Client) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Calls Gemini's `generateContent` endpoint.
    pub async fn generate_content<Req: Serialize>(
        &self,
        api_key: &str,
        request: &Req,
    ) -> Result<(u16, String)> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                // The key rides the query string; keep the URL out of error text.
                let e = e.without_url();
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.without_url())?;

        Ok((status, body))
    }
}
