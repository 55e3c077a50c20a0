//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! `Display` renders the caller-facing contract messages; variants carry the
//! raw upstream payloads that the API layer echoes back for diagnostics.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure reaching the upstream endpoint.
    #[error("cURL Error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-200 upstream status where the body carried `error.message`.
    #[error("Gemini API Error (HTTP {status}): {message}")]
    UpstreamStatus { status: u16, message: String },

    /// Non-200 upstream status with an unrecognized body.
    #[error("Gemini API Error (HTTP {status}). Response: {body}")]
    UpstreamStatusRaw { status: u16, body: String },

    /// 200 response whose top-level body was an error object.
    #[error("Gemini API returned an error: {0}")]
    UpstreamMessage(String),

    /// Inner document was not valid JSON or had no `prompt` field.
    #[error("Failed to parse structured prompt from Gemini response.")]
    PromptParse { raw_text: String },

    /// Envelope had neither usable candidates nor an error object.
    #[error("Unexpected response structure from Gemini API.")]
    UnexpectedShape { raw: Value },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
