//! Runtime configuration resolved from the environment.

use std::env;

pub struct Config {
    pub port: u16,
    pub gemini_model: String,
    /// Overrides the production Gemini endpoint, mainly for local testing.
    pub gemini_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(3000),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL").ok(),
        }
    }
}
