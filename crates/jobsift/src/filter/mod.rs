//! Multi-field filtering over inferred columns.

mod predicate;
mod request;
mod result;

pub use predicate::{split_tokens, Clause, Predicate};
pub use request::FilterRequest;
pub use result::{apply, FilterResult, MAX_RESULTS};
