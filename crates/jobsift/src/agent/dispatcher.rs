//! Forwards free-text queries to the configured agent.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{Result, SiftError};
use crate::input::Dataset;
use crate::schema::AliasTable;

use super::prompts::DEFAULT_STYLE;
use super::provider::{AgentContext, QueryAgent};

/// Holds the agent capability and the fixed style instruction.
#[derive(Clone)]
pub struct QueryDispatcher {
    agent: Arc<dyn QueryAgent>,
    style: String,
}

impl QueryDispatcher {
    /// Create a dispatcher using the default style instruction.
    pub fn new(agent: Arc<dyn QueryAgent>) -> Self {
        Self {
            agent,
            style: DEFAULT_STYLE.to_string(),
        }
    }

    /// Replace the style instruction.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Name of the underlying agent.
    pub fn agent_name(&self) -> &str {
        self.agent.name()
    }

    /// The style instruction sent with every query.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Send a query to the agent and return its answer unchanged.
    ///
    /// Empty or whitespace-only queries are rejected before the agent is
    /// called. Agent failures are returned as-is; nothing is retried.
    pub fn dispatch(&self, query: &str, dataset: &Dataset, aliases: &AliasTable) -> Result<String> {
        if query.trim().is_empty() {
            return Err(SiftError::InvalidRequest("No query provided".to_string()));
        }

        debug!(agent = self.agent.name(), query_len = query.len(), "dispatching query");

        let context = AgentContext::new(dataset, &self.style, aliases);
        self.agent.run(query, &context).inspect_err(|e| {
            warn!(agent = self.agent.name(), error = %e, "agent failed");
        })
    }
}
