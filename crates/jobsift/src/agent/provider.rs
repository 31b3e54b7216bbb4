//! Query agent trait and configuration.

use crate::error::Result;
use crate::input::Dataset;
use crate::schema::AliasTable;

/// Everything an agent receives alongside the user's question.
#[derive(Debug, Clone, Copy)]
pub struct AgentContext<'a> {
    /// The full dataset, read-only.
    pub dataset: &'a Dataset,
    /// Instruction describing how the answer should be phrased.
    pub style: &'a str,
    /// Aliases used to describe which columns carry which concepts.
    pub aliases: &'a AliasTable,
}

impl<'a> AgentContext<'a> {
    /// Create a new agent context.
    pub fn new(dataset: &'a Dataset, style: &'a str, aliases: &'a AliasTable) -> Self {
        Self {
            dataset,
            style,
            aliases,
        }
    }
}

/// Configuration for HTTP-backed agents.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Model identifier (e.g., "gemini-2.5-flash").
    pub model: String,

    /// Base URL of an OpenAI-compatible API.
    pub api_base: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Rows of the dataset rendered into the prompt.
    pub max_context_rows: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta/openai/".to_string(),
            max_tokens: 2048,
            temperature: 0.3,
            timeout_secs: 120,
            max_context_rows: 500,
        }
    }
}

/// A natural-language question answering capability.
///
/// Implementations must be thread-safe (Send + Sync) so one agent can serve
/// concurrent requests. Calls may block for a long time.
pub trait QueryAgent: Send + Sync {
    /// Answer a question about the dataset in the context.
    fn run(&self, query: &str, context: &AgentContext<'_>) -> Result<String>;

    /// Get the name of this agent (for logging/debugging).
    fn name(&self) -> &str;
}
