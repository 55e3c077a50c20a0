//! Relay service for structured prompt generation via Gemini
//!
//! Accepts a POST carrying a caller-supplied API key and free-text prompt
//! instructions, forwards a schema-constrained `generateContent` request
//! upstream, and reshapes the double-encoded reply into `{"prompt": ...}`
//! for the caller.

pub mod ai;
pub mod api;
pub mod app;
pub mod config;
pub mod error;

pub use error::{Error, Result};
