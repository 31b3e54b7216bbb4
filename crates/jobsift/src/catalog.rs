//! Main Catalog struct and public API.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::filter::{self, FilterRequest, FilterResult, Predicate};
use crate::info::{self, DataInfo};
use crate::input::{Dataset, Parser, ParserConfig, SourceMetadata};
use crate::schema::{AliasTable, ColumnBindings};

/// A loaded dataset together with the aliases used to interpret it.
///
/// Cloning is cheap: the dataset is shared, never copied or mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    dataset: Arc<Dataset>,
    aliases: AliasTable,
    source: Option<SourceMetadata>,
}

impl Catalog {
    /// Wrap an in-memory dataset with the built-in aliases.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            aliases: AliasTable::default(),
            source: None,
        }
    }

    /// Load a data file with default parser settings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, ParserConfig::default())
    }

    /// Load a data file with custom parser settings.
    pub fn load_with(path: impl AsRef<Path>, config: ParserConfig) -> Result<Self> {
        let (dataset, source) = Parser::with_config(config).parse_file(path)?;
        Ok(Self {
            dataset: Arc::new(dataset),
            aliases: AliasTable::default(),
            source: Some(source),
        })
    }

    /// Replace the alias table.
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// The shared dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The alias table in use.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Metadata about the file the dataset came from, if any.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }

    /// Which column each category resolves to.
    pub fn bindings(&self) -> ColumnBindings {
        ColumnBindings::resolve(self.dataset.columns(), &self.aliases)
    }

    /// Apply a filter request and return at most [`filter::MAX_RESULTS`] rows.
    pub fn filter(&self, request: &FilterRequest) -> FilterResult {
        let predicate = Predicate::build(&self.dataset, request, &self.aliases);
        let result = filter::apply(&self.dataset, &predicate);
        debug!(
            clauses = predicate.clauses().len(),
            count = result.count,
            total = result.total_count,
            "filter applied"
        );
        result
    }

    /// Describe the dataset and its filter options.
    pub fn info(&self) -> DataInfo {
        info::describe(&self.dataset, &self.aliases)
    }
}
