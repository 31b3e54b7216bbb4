//! Mock agent for testing and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Result, SiftError};

use super::provider::{AgentContext, QueryAgent};

/// Agent that returns predictable responses without any network access.
#[derive(Debug, Default)]
pub struct MockAgent {
    calls: AtomicUsize,
    failure: Option<String>,
}

impl MockAgent {
    /// Create a new mock agent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock agent whose every call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: Some(message.into()),
        }
    }

    /// Number of times [`QueryAgent::run`] has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QueryAgent for MockAgent {
    fn run(&self, query: &str, context: &AgentContext<'_>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(ref message) = self.failure {
            return Err(SiftError::Agent(message.clone()));
        }

        Ok(format!(
            "You asked: \"{}\". I have {} job postings across {} columns to look through.",
            query.trim(),
            context.dataset.row_count(),
            context.dataset.column_count()
        ))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
