//! Natural-language question to SQL text.

use async_trait::async_trait;
use subintel_core::{DEFAULT_MAX_TOKENS, strip_sql_fences};

use crate::ai_types::{ChatRequest, Message};
use crate::client::LlmClient;
use crate::error::LlmError;
use crate::prompt::system_prompt;

/// Produces SQL text for a question.
///
/// The returned text is not validated; executing it is the caller's business.
#[async_trait]
pub trait SqlSynthesizer: Send + Sync {
    /// Translate one question into SQL with fence markers stripped.
    async fn synthesize(&self, question: &str) -> Result<String, LlmError>;
}

/// Model-backed synthesizer: fixed system prompt, temperature 0, one attempt.
#[derive(Debug)]
pub struct QuerySynthesizer {
    client: LlmClient,
    system_prompt: String,
    max_tokens: u32,
}

impl QuerySynthesizer {
    #[must_use]
    pub fn new(client: LlmClient) -> Self {
        Self { client, system_prompt: system_prompt(), max_tokens: DEFAULT_MAX_TOKENS }
    }

    /// Caps the completion length.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn request_for(&self, question: &str) -> ChatRequest {
        ChatRequest {
            model: self.client.model().to_owned(),
            messages: vec![Message::system(self.system_prompt.clone()), Message::user(question)],
            temperature: 0.0,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl SqlSynthesizer for QuerySynthesizer {
    async fn synthesize(&self, question: &str) -> Result<String, LlmError> {
        let request = self.request_for(question);
        let raw = self.client.chat_completion(&request).await.inspect_err(|e| {
            tracing::warn!(status = ?e.status_code(), "SQL synthesis failed: {e}");
        })?;
        let sql = strip_sql_fences(&raw);
        tracing::debug!(model = %self.client.model(), "synthesized SQL: {sql}");
        Ok(sql)
    }
}
