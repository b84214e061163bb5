//! Remote completion service abstraction and the Gemini implementation.
//!
//! The pipeline talks to the model through the [`CompletionClient`] trait so
//! stages can be driven by a scripted client in tests. The real implementation
//! is [`GeminiClient`].

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Capability granted to the model for a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolGrant {
    /// Web search, invocable by the model during its reasoning.
    GoogleSearch,
}

/// One isolated, single-message completion.
///
/// Every request stands alone: no session or memory is shared between
/// requests or across runs.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier (e.g. `gemini-2.0-flash`)
    pub model: String,
    /// Persona instruction for this call
    pub system_instruction: String,
    /// The synthesized user message
    pub user_message: String,
    /// Tools the model may invoke while answering
    pub tools: Vec<ToolGrant>,
}

/// A client for a hosted conversational-completion service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion and collect the final response text.
    ///
    /// Each text fragment of the final response is followed by a newline. A
    /// response with no content collapses to an empty string.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
