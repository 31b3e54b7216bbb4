//! Dataset shape and filter options for client-side filter UIs.

use serde::Serialize;

use crate::input::{Cell, Dataset, Record};
use crate::schema::{AliasTable, ColumnBindings, SemanticCategory};

/// Number of rows included as a sample.
pub const SAMPLE_ROWS: usize = 3;

/// Distinct values available for each enumerable category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Cell>>,
}

impl FilterOptions {
    /// Options for a category, if it was present in the dataset.
    pub fn get(&self, category: SemanticCategory) -> Option<&[Cell]> {
        match category {
            SemanticCategory::Location => self.locations.as_deref(),
            SemanticCategory::Company => self.companies.as_deref(),
            SemanticCategory::Role => self.roles.as_deref(),
            SemanticCategory::Skills => None,
        }
    }
}

/// Summary of the loaded dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DataInfo {
    /// Number of rows.
    pub rows: usize,
    /// Column names in original order.
    pub columns: Vec<String>,
    /// The first few rows.
    pub sample: Vec<Record>,
    /// Sorted distinct values per present category.
    pub filter_options: FilterOptions,
}

/// Sorted distinct non-missing values of a column.
pub fn distinct_values(dataset: &Dataset, column: usize) -> Vec<Cell> {
    let mut values: Vec<Cell> = dataset
        .column_values(column)
        .filter(|cell| !cell.is_missing())
        .cloned()
        .collect();
    values.sort_by(|a, b| a.cmp_natural(b));
    values.dedup_by(|a, b| a.cmp_natural(b).is_eq());
    values
}

/// Describe a dataset: shape, sample, and filter options.
pub fn describe(dataset: &Dataset, aliases: &AliasTable) -> DataInfo {
    let bindings = ColumnBindings::resolve(dataset.columns(), aliases);
    let options = |category| {
        bindings
            .get(category)
            .map(|bound| distinct_values(dataset, bound.index))
    };

    DataInfo {
        rows: dataset.row_count(),
        columns: dataset.columns().to_vec(),
        sample: dataset.head(SAMPLE_ROWS),
        filter_options: FilterOptions {
            locations: options(SemanticCategory::Location),
            companies: options(SemanticCategory::Company),
            roles: options(SemanticCategory::Role),
        },
    }
}
