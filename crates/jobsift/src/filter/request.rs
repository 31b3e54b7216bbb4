//! Filter requests as supplied by callers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SiftError};
use crate::schema::SemanticCategory;

/// Per-category filter values.
///
/// `location`, `company` and `role` hold a single substring; `skills` holds a
/// comma-separated list where any entry may match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}

impl FilterRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a category.
    pub fn with(mut self, category: SemanticCategory, value: impl Into<String>) -> Self {
        *self.slot_mut(category) = Some(value.into());
        self
    }

    /// The value for a category, if one was supplied.
    pub fn get(&self, category: SemanticCategory) -> Option<&str> {
        match category {
            SemanticCategory::Location => self.location.as_deref(),
            SemanticCategory::Company => self.company.as_deref(),
            SemanticCategory::Role => self.role.as_deref(),
            SemanticCategory::Skills => self.skills.as_deref(),
        }
    }

    /// True when no category carries a value.
    pub fn is_empty(&self) -> bool {
        SemanticCategory::ALL.iter().all(|c| self.get(*c).is_none())
    }

    /// Build a request from a JSON `filters` object.
    ///
    /// An empty object is rejected. Unknown keys and `null` values are
    /// ignored; numbers and booleans are matched by their text form.
    ///
    /// Callers validate with this before [`crate::Catalog::filter`], so a
    /// rejected request never scans the dataset.
    pub fn from_json_map(map: &Map<String, Value>) -> Result<Self> {
        if map.is_empty() {
            return Err(SiftError::InvalidRequest("No filters provided".to_string()));
        }

        let mut request = Self::new();
        for category in SemanticCategory::ALL {
            let value = match map.get(category.key()) {
                None | Some(Value::Null) => continue,
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::Bool(b)) => b.to_string(),
                Some(_) => {
                    return Err(SiftError::InvalidRequest(format!(
                        "Filter '{}' must be a string",
                        category
                    )));
                }
            };
            request = request.with(category, value);
        }

        Ok(request)
    }

    fn slot_mut(&mut self, category: SemanticCategory) -> &mut Option<String> {
        match category {
            SemanticCategory::Location => &mut self.location,
            SemanticCategory::Company => &mut self.company,
            SemanticCategory::Role => &mut self.role,
            SemanticCategory::Skills => &mut self.skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_empty_map_rejected() {
        let err = FilterRequest::from_json_map(&Map::new()).unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_known_keys_extracted() {
        let request = FilterRequest::from_json_map(&map(json!({
            "location": "Pune",
            "skills": "python, rust",
            "salary": "100k"
        })))
        .unwrap();

        assert_eq!(request.get(SemanticCategory::Location), Some("Pune"));
        assert_eq!(request.get(SemanticCategory::Skills), Some("python, rust"));
        assert_eq!(request.get(SemanticCategory::Role), None);
    }

    #[test]
    fn test_unknown_keys_only_is_accepted() {
        let request = FilterRequest::from_json_map(&map(json!({ "salary": "100k" }))).unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn test_scalar_values_stringified() {
        let request = FilterRequest::from_json_map(&map(json!({
            "location": 560001,
            "company": null
        })))
        .unwrap();
        assert_eq!(request.get(SemanticCategory::Location), Some("560001"));
        assert_eq!(request.get(SemanticCategory::Company), None);
    }

    #[test]
    fn test_nested_values_rejected() {
        let err = FilterRequest::from_json_map(&map(json!({ "role": ["a", "b"] }))).unwrap_err();
        assert!(err.is_invalid_request());
    }
}
