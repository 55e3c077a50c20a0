//! Application state and server wiring.

use crate::ai::{GeminiPromptClient, PromptService};
use crate::api;
use crate::config::Config;
use crate::Result;
use axum::Router;
use std::sync::Arc;
use tracing::info;

/// Shared per-process state handed to request handlers.
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<dyn PromptService>,
}

impl AppState {
    /// Wire the Gemini-backed service from runtime configuration.
    pub fn from_config(config: &Config) -> Self {
        // Reuse one HTTP connection pool across requests.
        let http_client = reqwest::Client::new();

        let mut service =
            GeminiPromptClient::new_with_client(config.gemini_model.clone(), http_client);
        if let Some(base_url) = &config.gemini_base_url {
            info!("Using Gemini endpoint override: {}", base_url);
            service = service.with_base_url(base_url.clone());
        }

        Self {
            prompt_service: Arc::new(service),
        }
    }

    /// Build state around an injected service, for tests and harnesses.
    pub fn with_service(service: Arc<dyn PromptService>) -> Self {
        Self {
            prompt_service: service,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
