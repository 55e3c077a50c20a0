//! AI service integration for structured prompt generation
//!
//! Provides the trait seam between the HTTP layer and the Gemini backend
//! that turns free-text instructions into a refined prompt.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiPromptClient;
pub use mock::MockPromptClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PromptService: Send + Sync {
    /// Generate a refined prompt from free-text instructions.
    ///
    /// The caller supplies the upstream API key with each request; the
    /// service holds no credentials of its own.
    async fn generate_prompt(&self, api_key: &str, details: &str) -> Result<String>;
}
