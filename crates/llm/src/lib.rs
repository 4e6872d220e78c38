//! SQL synthesis over an OpenAI-compatible chat-completions API.
//!
//! [`QuerySynthesizer`] sends the fixed system prompt from [`prompt`] plus
//! the user's question and returns the model's SQL with fences removed.

mod ai_types;
pub mod client;
pub mod error;
pub mod prompt;
pub mod synthesize;

pub use client::LlmClient;
pub use error::LlmError;
pub use prompt::{CANONICAL_QUESTIONS, CanonicalQuestion, PROMPT_VERSION, system_prompt};
pub use synthesize::{QuerySynthesizer, SqlSynthesizer};

#[cfg(test)]
mod tests;
