//! Executes predicates and assembles bounded result sets.

use serde::Serialize;

use super::predicate::Predicate;
use crate::input::{Dataset, Record};

/// Maximum number of rows returned by a filter.
pub const MAX_RESULTS: usize = 50;

/// Outcome of filtering a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResult {
    /// The first [`MAX_RESULTS`] matching rows, in original order.
    pub results: Vec<Record>,
    /// Number of matching rows before truncation.
    pub count: usize,
    /// Number of rows in the dataset.
    pub total_count: usize,
}

/// Evaluate a predicate over every row.
pub fn apply(dataset: &Dataset, predicate: &Predicate) -> FilterResult {
    let mut results = Vec::new();
    let mut count = 0;

    for row in 0..dataset.row_count() {
        if !predicate.matches(dataset, row) {
            continue;
        }
        count += 1;
        if results.len() < MAX_RESULTS {
            if let Some(record) = dataset.record(row) {
                results.push(record);
            }
        }
    }

    FilterResult {
        results,
        count,
        total_count: dataset.row_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterRequest;
    use crate::input::Cell;
    use crate::schema::{AliasTable, SemanticCategory};

    fn postings(n: usize, matching: usize) -> Dataset {
        let rows: Vec<Vec<String>> = (0..n)
            .map(|i| {
                let role = if i < matching { "Engineer" } else { "Designer" };
                vec![format!("{}", i), role.to_string()]
            })
            .collect();
        Dataset::from_strings(&["id".to_string(), "role".to_string()], rows.as_slice())
    }

    #[test]
    fn test_truncates_to_max_results() {
        let data = postings(80, 70);
        let request = FilterRequest::new().with(SemanticCategory::Role, "engineer");
        let result = apply(&data, &Predicate::build(&data, &request, &AliasTable::default()));

        assert_eq!(result.results.len(), 50);
        assert_eq!(result.count, 70);
        assert_eq!(result.total_count, 80);
        assert_eq!(result.results[49]["id"], Cell::Integer(49));
    }

    #[test]
    fn test_unconstrained_returns_all_up_to_cap() {
        let data = postings(10, 0);
        let result = apply(&data, &Predicate::default());
        assert_eq!(result.count, 10);
        assert_eq!(result.results.len(), 10);
    }

    #[test]
    fn test_no_matches() {
        let data = postings(5, 0);
        let request = FilterRequest::new().with(SemanticCategory::Role, "engineer");
        let result = apply(&data, &Predicate::build(&data, &request, &AliasTable::default()));
        assert_eq!(result.count, 0);
        assert!(result.results.is_empty());
        assert_eq!(result.total_count, 5);
    }

    #[test]
    fn test_serialized_shape() {
        let data = Dataset::from_strings(&["role", "salary"], &[vec!["Engineer", ""]]);
        let result = apply(&data, &Predicate::default());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"results":[{"role":"Engineer","salary":null}],"count":1,"total_count":1}"#
        );
    }
}
