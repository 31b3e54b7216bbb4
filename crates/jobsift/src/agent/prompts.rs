//! Prompt templates for agent interactions.

use crate::error::{Result, SiftError};
use crate::input::Dataset;
use crate::schema::{ColumnBindings, SemanticCategory};

use super::provider::AgentContext;

/// Default phrasing instruction passed with every query.
pub const DEFAULT_STYLE: &str =
    "Return all details in a chatbot-style explanation. It should be conversational.";

/// System prompt for the agent.
pub fn system_prompt(style: &str) -> String {
    format!(
        "You are a job search assistant. You answer questions about a table of job \
         postings that is provided to you as CSV. Only use facts present in the table; \
         if the answer is not in the data, say so.\n\n{}",
        style.trim()
    )
}

/// Build the user prompt: dataset description, data, then the question.
pub fn query_prompt(query: &str, context: &AgentContext<'_>, max_rows: usize) -> Result<String> {
    let dataset = context.dataset;
    let bindings = ColumnBindings::resolve(dataset.columns(), context.aliases);

    let mapping = SemanticCategory::ALL
        .iter()
        .filter_map(|category| {
            bindings
                .get(*category)
                .map(|bound| format!("- {}: column \"{}\"", category, bound.name))
        })
        .collect::<Vec<_>>();
    let mapping = if mapping.is_empty() {
        "- none detected".to_string()
    } else {
        mapping.join("\n")
    };

    let shown = dataset.row_count().min(max_rows);
    let truncation = if shown < dataset.row_count() {
        format!(
            "\nOnly the first {} of {} rows are shown.",
            shown,
            dataset.row_count()
        )
    } else {
        String::new()
    };

    Ok(format!(
        r#"## Dataset
- Rows: {}
- Columns: {}

## Detected fields
{}

## Data (CSV){}
```csv
{}```

## Question
{}"#,
        dataset.row_count(),
        dataset.columns().join(", "),
        mapping,
        truncation,
        render_csv(dataset, max_rows)?,
        query.trim()
    ))
}

/// Render the first `max_rows` rows as CSV with a header.
pub fn render_csv(dataset: &Dataset, max_rows: usize) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(dataset.columns())?;

    for row in 0..dataset.row_count().min(max_rows) {
        let fields: Vec<String> = (0..dataset.column_count())
            .map(|col| {
                dataset
                    .cell(row, col)
                    .and_then(|cell| cell.as_text())
                    .map(|text| text.into_owned())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&fields)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SiftError::Config(format!("Failed to render dataset: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| SiftError::Config(format!("Dataset is not valid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AliasTable;

    fn data() -> Dataset {
        Dataset::from_strings(
            &["title", "city", "skills"],
            &[
                vec!["Backend Engineer", "Pune", "Go, Python"],
                vec!["Analyst", "", "SQL"],
            ],
        )
    }

    #[test]
    fn test_render_csv_quotes_and_blanks() {
        let csv = render_csv(&data(), 10).unwrap();
        assert_eq!(
            csv,
            "title,city,skills\nBackend Engineer,Pune,\"Go, Python\"\nAnalyst,,SQL\n"
        );
    }

    #[test]
    fn test_render_csv_respects_row_limit() {
        let csv = render_csv(&data(), 1).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_query_prompt_mentions_fields_and_question() {
        let dataset = data();
        let aliases = AliasTable::default();
        let context = AgentContext::new(&dataset, DEFAULT_STYLE, &aliases);
        let prompt = query_prompt("  Which jobs need Go? ", &context, 1).unwrap();

        assert!(prompt.contains("- role: column \"title\""));
        assert!(prompt.contains("- location: column \"city\""));
        assert!(prompt.contains("Only the first 1 of 2 rows are shown."));
        assert!(prompt.ends_with("Which jobs need Go?"));
    }

    #[test]
    fn test_system_prompt_includes_style() {
        assert!(system_prompt(DEFAULT_STYLE).ends_with("It should be conversational."));
    }
}
