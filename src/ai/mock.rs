use super::PromptService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub struct MockPromptClient {
    prompt_responses: Arc<Mutex<Vec<String>>>,
    error_response: Arc<Mutex<Option<Error>>>,
    call_count: Arc<Mutex<usize>>,
    last_api_key: Arc<Mutex<Option<String>>>,
}

impl MockPromptClient {
    pub fn new() -> Self {
        Self {
            prompt_responses: Arc::new(Mutex::new(Vec::new())),
            error_response: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
            last_api_key: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_prompt_response(self, response: String) -> Self {
        self.prompt_responses.lock().unwrap().push(response);
        self
    }

    /// Queue an error for the next call. Errors are not cloneable, so the
    /// mock hands it out once and falls back to responses afterwards.
    pub fn with_error(self, error: Error) -> Self {
        *self.error_response.lock().unwrap() = Some(error);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.last_api_key.lock().unwrap().clone()
    }
}

impl Default for MockPromptClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptService for MockPromptClient {
    async fn generate_prompt(&self, api_key: &str, details: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        *self.last_api_key.lock().unwrap() = Some(api_key.to_string());

        if let Some(error) = self.error_response.lock().unwrap().take() {
            return Err(error);
        }

        let responses = self.prompt_responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(format!("A refined prompt based on: {}", details))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
