//! API request handlers.

mod data;
mod filter;
mod health;
mod query;

pub use data::*;
pub use filter::*;
pub use health::*;
pub use query::*;
