// ABOUTME: Analysis agent library: turns a StructuredRecord into a natural-language analysis.
// ABOUTME: Re-exports ChatClient, Agent, AgentError, prompt building, and trace spans.

//! pagescope-agent - the language-model collaborator for pagescope.
//!
//! The extraction core hands over a [`StructuredRecord`]; this crate renders
//! it into a prompt and runs one chat completion against an OpenAI-style
//! service. Service failures are captured, not propagated, when going through
//! [`Agent::run`].
//!
//! ```no_run
//! use pagescope_agent::{Agent, ChatClient};
//! use pagescope_extract::StructuredRecord;
//!
//! # async fn example(record: StructuredRecord) -> Result<(), pagescope_agent::AgentError> {
//! let chat = ChatClient::from_env()?;
//! let agent = Agent::webpage_analyzer();
//! let analysis = agent.run(&chat, &record).await;
//! println!("{}", analysis);
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod error;
pub mod prompt;
pub mod trace;

pub use crate::chat::{ChatClient, API_KEY_ENV, DEFAULT_MODEL};
pub use crate::error::AgentError;
pub use crate::prompt::{build_analysis_prompt, ANALYZE_INSTRUCTIONS};
pub use crate::trace::{gen_trace_id, LogSink, Span, TraceSink};

use pagescope_extract::StructuredRecord;

/// Formatter turning a record into the completion's user message.
pub type RecordFormatter = fn(&StructuredRecord) -> String;

/// An analysis agent: a name, fixed instructions, and an explicit formatter.
///
/// The formatter is a named function reference, not a positional tool list,
/// so there is no implicit "first tool formats the input" convention.
pub struct Agent {
    pub name: &'static str,
    pub instructions: &'static str,
    pub format: RecordFormatter,
}

impl Agent {
    /// The standard webpage analyzer configuration.
    pub fn webpage_analyzer() -> Self {
        Self {
            name: "WebpageAnalyzer",
            instructions: ANALYZE_INSTRUCTIONS,
            format: build_analysis_prompt,
        }
    }

    /// Typed analysis path: format the record and run one completion.
    pub async fn analyze(
        &self,
        chat: &ChatClient,
        record: &StructuredRecord,
    ) -> Result<String, AgentError> {
        let input = (self.format)(record);
        chat.complete(self.instructions, &input).await
    }

    /// Run the agent, capturing any downstream failure as an error string
    /// instead of propagating it to the caller.
    pub async fn run(&self, chat: &ChatClient, record: &StructuredRecord) -> String {
        match self.analyze(chat, record).await {
            Ok(analysis) => analysis,
            Err(e) => {
                log::warn!("{} failed: {}", self.name, e);
                format!("Error in agent execution: {}", e)
            }
        }
    }
}
