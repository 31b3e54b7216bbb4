//! Column inference: binds semantic categories to actual column names.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::category::{AliasTable, SemanticCategory};

/// Case-insensitive lookup from column name to its original spelling.
///
/// When two columns differ only by case, the first one wins.
#[derive(Debug, Clone)]
pub struct ColumnIndex<'a> {
    by_lowercase: HashMap<String, (usize, &'a str)>,
}

impl<'a> ColumnIndex<'a> {
    /// Build the index over a dataset's column names.
    pub fn new(columns: &'a [String]) -> Self {
        let mut by_lowercase = HashMap::with_capacity(columns.len());
        for (pos, name) in columns.iter().enumerate() {
            by_lowercase
                .entry(name.to_lowercase())
                .or_insert((pos, name.as_str()));
        }
        Self { by_lowercase }
    }

    /// First alias present in the index, as `(position, original name)`.
    pub fn first_match(&self, aliases: &[String]) -> Option<(usize, &'a str)> {
        aliases
            .iter()
            .find_map(|alias| self.by_lowercase.get(alias.as_str()).copied())
    }
}

/// A category bound to a physical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundColumn {
    /// Position of the column in the dataset.
    pub index: usize,
    /// Column name with its original casing.
    pub name: String,
}

/// Resolve one category against a set of column names.
///
/// Returns the original-cased name of the first alias that exists, or `None`
/// if the category is absent from this dataset.
pub fn resolve<'a>(
    columns: &'a [String],
    category: SemanticCategory,
    aliases: &AliasTable,
) -> Option<&'a str> {
    ColumnIndex::new(columns)
        .first_match(aliases.aliases(category))
        .map(|(_, name)| name)
}

/// Resolution of every category for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnBindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<BoundColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<BoundColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<BoundColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<BoundColumn>,
}

impl ColumnBindings {
    /// Resolve all categories against the given column names.
    pub fn resolve(columns: &[String], aliases: &AliasTable) -> Self {
        let index = ColumnIndex::new(columns);
        let mut bindings = Self::default();

        for category in SemanticCategory::ALL {
            let bound = index
                .first_match(aliases.aliases(category))
                .map(|(index, name)| BoundColumn {
                    index,
                    name: name.to_string(),
                });
            debug!(
                %category,
                column = bound.as_ref().map(|b| b.name.as_str()).unwrap_or("<absent>"),
                "resolved category"
            );
            *bindings.slot_mut(category) = bound;
        }

        bindings
    }

    /// The column bound to a category, if any.
    pub fn get(&self, category: SemanticCategory) -> Option<&BoundColumn> {
        match category {
            SemanticCategory::Location => self.location.as_ref(),
            SemanticCategory::Company => self.company.as_ref(),
            SemanticCategory::Role => self.role.as_ref(),
            SemanticCategory::Skills => self.skills.as_ref(),
        }
    }

    fn slot_mut(&mut self, category: SemanticCategory) -> &mut Option<BoundColumn> {
        match category {
            SemanticCategory::Location => &mut self.location,
            SemanticCategory::Company => &mut self.company,
            SemanticCategory::Role => &mut self.role,
            SemanticCategory::Skills => &mut self.skills,
        }
    }
}
