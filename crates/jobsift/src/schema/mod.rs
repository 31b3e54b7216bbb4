//! Schema inference: which columns carry which concepts.

mod category;
mod resolver;

pub use category::{AliasTable, SemanticCategory};
pub use resolver::{resolve, BoundColumn, ColumnBindings, ColumnIndex};
