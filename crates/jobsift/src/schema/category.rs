//! Semantic categories and their column-name aliases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiftError;

/// A concept the engine knows how to find in an arbitrary dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticCategory {
    /// Where the job is (city, area, ...).
    Location,
    /// Hiring organization.
    Company,
    /// Job title or designation.
    Role,
    /// Required skills or technologies.
    Skills,
}

impl SemanticCategory {
    /// All categories, in the order filters are applied.
    pub const ALL: [SemanticCategory; 4] = [
        SemanticCategory::Location,
        SemanticCategory::Company,
        SemanticCategory::Role,
        SemanticCategory::Skills,
    ];

    /// Key used for this category in filter requests.
    pub fn key(&self) -> &'static str {
        match self {
            SemanticCategory::Location => "location",
            SemanticCategory::Company => "company",
            SemanticCategory::Role => "role",
            SemanticCategory::Skills => "skills",
        }
    }

    /// Plural key used for enumerated filter options.
    ///
    /// Skills are matched from free text and are never enumerated.
    pub fn options_key(&self) -> Option<&'static str> {
        match self {
            SemanticCategory::Location => Some("locations"),
            SemanticCategory::Company => Some("companies"),
            SemanticCategory::Role => Some("roles"),
            SemanticCategory::Skills => None,
        }
    }

    /// Whether a filter value is a comma-separated list matched with OR.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, SemanticCategory::Skills)
    }

    /// Built-in aliases in priority order.
    pub fn default_aliases(&self) -> &'static [&'static str] {
        match self {
            SemanticCategory::Location => &["location", "city", "place", "area", "loc"],
            SemanticCategory::Company => &[
                "company",
                "company_name",
                "organization",
                "employer",
                "org",
            ],
            SemanticCategory::Role => &[
                "role",
                "position",
                "job_title",
                "title",
                "designation",
                "job",
                "job_role",
            ],
            SemanticCategory::Skills => {
                &["skills", "required_skills", "technologies", "tech_stack"]
            }
        }
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SemanticCategory {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "location" => Ok(SemanticCategory::Location),
            "company" => Ok(SemanticCategory::Company),
            "role" => Ok(SemanticCategory::Role),
            "skills" => Ok(SemanticCategory::Skills),
            other => Err(SiftError::Config(format!(
                "Unknown category: {}. Use location, company, role, or skills.",
                other
            ))),
        }
    }
}

/// Priority-ordered alias lists for every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    location: Vec<String>,
    company: Vec<String>,
    role: Vec<String>,
    skills: Vec<String>,
}

impl AliasTable {
    /// Aliases for a category, highest priority first.
    pub fn aliases(&self, category: SemanticCategory) -> &[String] {
        match category {
            SemanticCategory::Location => &self.location,
            SemanticCategory::Company => &self.company,
            SemanticCategory::Role => &self.role,
            SemanticCategory::Skills => &self.skills,
        }
    }

    /// Append an alias at the lowest priority. Duplicates are ignored.
    pub fn with_alias(mut self, category: SemanticCategory, alias: impl AsRef<str>) -> Self {
        let alias = alias.as_ref().trim().to_lowercase();
        let list = match category {
            SemanticCategory::Location => &mut self.location,
            SemanticCategory::Company => &mut self.company,
            SemanticCategory::Role => &mut self.role,
            SemanticCategory::Skills => &mut self.skills,
        };
        if !alias.is_empty() && !list.contains(&alias) {
            list.push(alias);
        }
        self
    }

    /// Parse a `category=column` alias specification.
    pub fn parse_spec(spec: &str) -> Result<(SemanticCategory, String), SiftError> {
        let (category, column) = spec.split_once('=').ok_or_else(|| {
            SiftError::Config(format!(
                "Invalid alias '{}'. Expected <category>=<column>.",
                spec
            ))
        })?;
        let column = column.trim();
        if column.is_empty() {
            return Err(SiftError::Config(format!(
                "Invalid alias '{}': column name is empty",
                spec
            )));
        }
        Ok((category.parse()?, column.to_string()))
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        let owned = |category: SemanticCategory| -> Vec<String> {
            category
                .default_aliases()
                .iter()
                .map(|a| a.to_string())
                .collect()
        };
        Self {
            location: owned(SemanticCategory::Location),
            company: owned(SemanticCategory::Company),
            role: owned(SemanticCategory::Role),
            skills: owned(SemanticCategory::Skills),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_aliases_are_lowercase() {
        let table = AliasTable::default();
        for category in SemanticCategory::ALL {
            for alias in table.aliases(category) {
                assert_eq!(alias, &alias.to_lowercase());
            }
        }
    }

    #[test]
    fn test_with_alias_appends_last() {
        let table = AliasTable::default().with_alias(SemanticCategory::Location, "Region");
        assert_eq!(table.aliases(SemanticCategory::Location).last().unwrap(), "region");
    }

    #[test]
    fn test_with_alias_ignores_duplicates() {
        let table = AliasTable::default()
            .with_alias(SemanticCategory::Role, "title")
            .with_alias(SemanticCategory::Role, "post")
            .with_alias(SemanticCategory::Role, "POST");
        let roles = table.aliases(SemanticCategory::Role);
        assert_eq!(roles.iter().filter(|a| *a == "title").count(), 1);
        assert_eq!(roles.iter().filter(|a| *a == "post").count(), 1);
    }

    #[test]
    fn test_parse_spec() {
        let (category, column) = AliasTable::parse_spec("Skills=stack").unwrap();
        assert_eq!(category, SemanticCategory::Skills);
        assert_eq!(column, "stack");

        assert!(AliasTable::parse_spec("skills").is_err());
        assert!(AliasTable::parse_spec("salary=pay").is_err());
        assert!(AliasTable::parse_spec("role=").is_err());
    }

    #[test]
    fn test_options_keys() {
        assert_eq!(SemanticCategory::Location.options_key(), Some("locations"));
        assert_eq!(SemanticCategory::Company.options_key(), Some("companies"));
        assert_eq!(SemanticCategory::Role.options_key(), Some("roles"));
        assert_eq!(SemanticCategory::Skills.options_key(), None);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("ROLE".parse::<SemanticCategory>().unwrap(), SemanticCategory::Role);
        assert!("title".parse::<SemanticCategory>().is_err());
    }
}
