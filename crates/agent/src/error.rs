// ABOUTME: Error types for the analysis agent's chat-completion calls.
// ABOUTME: Provides AgentError enum covering config, transport, and API failures.

use thiserror::Error;

/// Errors that can occur when talking to the chat-completion service.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The API key environment variable is missing or empty.
    #[error("{0} is not set; export it before running analysis")]
    MissingApiKey(&'static str),

    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("chat API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The response parsed but contained no choices.
    #[error("chat API returned no choices")]
    EmptyChoices,
}
