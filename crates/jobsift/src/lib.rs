//! jobsift: schema-agnostic filtering and natural-language querying over
//! tabular job data.
//!
//! Job datasets rarely agree on column names ("city" vs "location", "title"
//! vs "designation"). jobsift binds a fixed set of semantic categories to
//! whatever columns a dataset actually has, then filters across them.
//!
//! # Core Principles
//!
//! - **Schema-agnostic**: categories are found by a priority-ordered alias table
//! - **Read-only**: the dataset is loaded once and never mutated
//! - **Bounded**: filters return at most 50 rows with exact totals
//!
//! # Example
//!
//! ```no_run
//! use jobsift::{Catalog, FilterRequest, SemanticCategory};
//!
//! let catalog = Catalog::load("job_data.csv").unwrap();
//! let result = catalog.filter(
//!     &FilterRequest::new()
//!         .with(SemanticCategory::Role, "engineer")
//!         .with(SemanticCategory::Skills, "python, rust"),
//! );
//!
//! println!("{} of {} postings match", result.count, result.total_count);
//! ```

pub mod agent;
pub mod error;
pub mod filter;
pub mod info;
pub mod input;
pub mod schema;

mod catalog;

pub use crate::catalog::Catalog;
pub use agent::{
    AgentConfig, AgentContext, MockAgent, OpenAICompatibleAgent, QueryAgent, QueryDispatcher,
    DEFAULT_STYLE,
};
pub use error::{Result, SiftError};
pub use filter::{FilterRequest, FilterResult, Predicate, MAX_RESULTS};
pub use info::{DataInfo, FilterOptions};
pub use input::{Cell, Dataset, Parser, ParserConfig, Record, SourceMetadata};
pub use schema::{resolve, AliasTable, ColumnBindings, SemanticCategory};
