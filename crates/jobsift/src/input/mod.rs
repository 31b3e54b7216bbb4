//! Input parsing and the in-memory dataset.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{is_null_value, Cell, Dataset, Record, SourceMetadata};
