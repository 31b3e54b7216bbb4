//! Natural-language query agents.
//!
//! A [`QueryAgent`] answers a free-text question about the loaded dataset.
//! The core only depends on the trait; concrete agents are chosen at startup.
//!
//! # Supported Agents
//!
//! - **OpenAI-compatible** - any `chat/completions` endpoint; defaults to
//!   Gemini's compatibility layer (requires `JOBSIFT_API_KEY`,
//!   `GEMINI_API_KEY` or `OPENAI_API_KEY`)
//! - **Mock** - deterministic, offline
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use jobsift::{AgentConfig, AliasTable, Dataset, OpenAICompatibleAgent, QueryDispatcher};
//!
//! let agent = OpenAICompatibleAgent::from_env(AgentConfig::default()).unwrap();
//! let dispatcher = QueryDispatcher::new(Arc::new(agent));
//! let dataset = Dataset::default();
//! let answer = dispatcher
//!     .dispatch("Which companies hire in Pune?", &dataset, &AliasTable::default())
//!     .unwrap();
//! println!("{}", answer);
//! ```

mod dispatcher;
mod mock;
mod openai;
mod prompts;
mod provider;

pub use dispatcher::QueryDispatcher;
pub use mock::MockAgent;
pub use openai::{OpenAICompatibleAgent, API_KEY_VARS};
pub use prompts::DEFAULT_STYLE;
pub use provider::{AgentConfig, AgentContext, QueryAgent};
