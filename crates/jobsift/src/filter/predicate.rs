//! Compound row predicates built from filter requests.

use tracing::debug;

use super::request::FilterRequest;
use crate::input::Dataset;
use crate::schema::{AliasTable, ColumnIndex, SemanticCategory};

/// A single per-category test against one bound column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Cell contains the (lower-cased) needle.
    Contains {
        category: SemanticCategory,
        column: usize,
        needle: String,
    },
    /// Cell contains at least one of the (lower-cased) needles.
    ContainsAny {
        category: SemanticCategory,
        column: usize,
        needles: Vec<String>,
    },
}

impl Clause {
    /// The category this clause constrains.
    pub fn category(&self) -> SemanticCategory {
        match self {
            Clause::Contains { category, .. } | Clause::ContainsAny { category, .. } => *category,
        }
    }

    fn matches(&self, dataset: &Dataset, row: usize) -> bool {
        match self {
            Clause::Contains { column, needle, .. } => dataset
                .cell(row, *column)
                .is_some_and(|cell| cell.contains_lowercase(needle)),
            Clause::ContainsAny {
                column, needles, ..
            } => dataset.cell(row, *column).is_some_and(|cell| {
                cell.as_text().is_some_and(|text| {
                    let text = text.to_lowercase();
                    needles.iter().any(|n| text.contains(n.as_str()))
                })
            }),
        }
    }
}

/// Split a comma-separated list into trimmed, lower-cased, non-empty tokens.
pub fn split_tokens(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Logical AND of zero or more clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Build the predicate for a request against a dataset's columns.
    ///
    /// Categories with an empty value, or whose column cannot be resolved,
    /// contribute no clause.
    pub fn build(dataset: &Dataset, request: &FilterRequest, aliases: &AliasTable) -> Self {
        let index = ColumnIndex::new(dataset.columns());
        let mut clauses = Vec::new();

        for category in SemanticCategory::ALL {
            let Some(value) = request.get(category).filter(|v| !v.is_empty()) else {
                continue;
            };

            let Some((column, name)) = index.first_match(aliases.aliases(category)) else {
                debug!(%category, "no column for category, skipping clause");
                continue;
            };

            let clause = if category.is_multi_valued() {
                let needles = split_tokens(value);
                if needles.is_empty() {
                    continue;
                }
                Clause::ContainsAny {
                    category,
                    column,
                    needles,
                }
            } else {
                Clause::Contains {
                    category,
                    column,
                    needle: value.to_lowercase(),
                }
            };

            debug!(%category, column = name, "added filter clause");
            clauses.push(clause);
        }

        Self { clauses }
    }

    /// Evaluate the predicate for one row.
    pub fn matches(&self, dataset: &Dataset, row: usize) -> bool {
        self.clauses.iter().all(|c| c.matches(dataset, row))
    }

    /// The clauses making up this predicate.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// True when no clause constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }
}
