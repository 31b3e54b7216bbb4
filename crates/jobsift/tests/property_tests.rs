//! Property-based tests for column resolution and filtering.
//!
//! These tests use proptest to generate random datasets and filters and
//! verify the engine's invariants hold for all of them:
//!
//! 1. **Bounded results**: returned rows = min(count, 50), count <= total
//! 2. **Determinism**: resolution depends only on column names
//! 3. **Consistency**: filter options are sorted, unique, non-missing
//! 4. **Monotonicity**: adding a category never grows the match count
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p jobsift --test property_tests
//! PROPTEST_CASES=10000 cargo test -p jobsift --test property_tests
//! ```

use proptest::prelude::*;

use jobsift::{
    resolve, AliasTable, Catalog, Cell, Dataset, FilterRequest, SemanticCategory, MAX_RESULTS,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Cell contents drawn from a small vocabulary so filters actually hit.
fn cell_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("NA".to_string()),
        "(Pune|Delhi|Remote|Acme|Globex|Engineer|Analyst|Python|Rust|Go)",
        "[A-Za-z ,]{0,12}",
        "[0-9]{1,4}",
    ]
}

/// A job dataset with the standard columns and 0..120 rows.
fn job_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(prop::collection::vec(cell_value(), 4), 0..120).prop_map(|rows| {
        Dataset::from_strings(
            &[
                "Location".to_string(),
                "company".to_string(),
                "title".to_string(),
                "skills".to_string(),
            ],
            rows.as_slice(),
        )
    })
}

fn filter_value() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        "(pune|DELHI|acme|engineer|python, rust|go,|e)",
        "[a-z]{0,3}",
    ])
}

fn filter_request() -> impl Strategy<Value = FilterRequest> {
    (filter_value(), filter_value(), filter_value(), filter_value()).prop_map(
        |(location, company, role, skills)| FilterRequest {
            location,
            company,
            role,
            skills,
        },
    )
}

/// Column names that may or may not be aliases.
fn column_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        "(location|City|AREA|org|Company|job_title|Role|title|skills|tech_stack|salary|id)",
        0..8,
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_result_is_bounded(data in job_dataset(), request in filter_request()) {
        let total = data.row_count();
        let result = Catalog::new(data).filter(&request);

        prop_assert!(result.count <= result.total_count);
        prop_assert_eq!(result.total_count, total);
        prop_assert_eq!(result.results.len(), result.count.min(MAX_RESULTS));
    }

    #[test]
    fn prop_resolution_is_deterministic(columns in column_names()) {
        let aliases = AliasTable::default();
        for category in SemanticCategory::ALL {
            let first = resolve(&columns, category, &aliases);
            let second = resolve(&columns, category, &aliases);
            prop_assert_eq!(first, second);

            if let Some(name) = first {
                prop_assert!(columns.iter().any(|c| c == name));
                prop_assert!(aliases.aliases(category).contains(&name.to_lowercase()));
            }
        }
    }

    #[test]
    fn prop_resolution_ignores_column_order(columns in column_names()) {
        let aliases = AliasTable::default();
        let mut reversed = columns.clone();
        reversed.reverse();

        for category in SemanticCategory::ALL {
            let forward = resolve(&columns, category, &aliases).map(|s| s.to_lowercase());
            let backward = resolve(&reversed, category, &aliases).map(|s| s.to_lowercase());
            prop_assert_eq!(forward, backward);
        }
    }

    #[test]
    fn prop_filter_options_sorted_unique(data in job_dataset()) {
        let info = Catalog::new(data).info();
        let locations = info.filter_options.locations.expect("Location column is present");

        prop_assert!(locations.iter().all(|c| !c.is_missing()));
        for pair in locations.windows(2) {
            prop_assert!(pair[0].cmp_natural(&pair[1]).is_lt());
        }
    }

    #[test]
    fn prop_adding_category_never_grows(data in job_dataset(), request in filter_request(), extra in "[a-z]{1,2}") {
        let catalog = Catalog::new(data);
        let base = catalog.filter(&FilterRequest { role: None, ..request.clone() });
        let narrowed = catalog.filter(&FilterRequest { role: Some(extra), ..request });
        prop_assert!(narrowed.count <= base.count);
    }

    #[test]
    fn prop_matched_rows_satisfy_every_clause(data in job_dataset(), needle in "[a-z]{1,2}") {
        let catalog = Catalog::new(data);
        let result = catalog.filter(&FilterRequest::new().with(SemanticCategory::Company, needle.clone()));

        for record in &result.results {
            let cell: &Cell = &record["company"];
            prop_assert!(cell.contains_lowercase(&needle));
        }
    }
}
