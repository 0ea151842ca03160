// Simple metadata filter implementation
use serde_json::Value;

use crate::document::Metadata;

pub trait Filter: Send + Sync {
    fn matches(&self, metadata: &Metadata) -> bool;
}

pub struct MetadataFilter {
    condition: FilterCondition,
}

#[derive(Debug, Clone)]
pub enum FilterCondition {
    Equals { field: String, value: Value },
    NotEquals { field: String, value: Value },
    GreaterThan { field: String, value: f64 },
    LessThan { field: String, value: f64 },
    GreaterEqual { field: String, value: f64 },
    LessEqual { field: String, value: f64 },
    Contains { field: String, value: String },
    And(Vec<FilterCondition>),
    Or(Vec<FilterCondition>),
    Not(Box<FilterCondition>),
}

impl MetadataFilter {
    pub fn new(condition: FilterCondition) -> Self {
        Self { condition }
    }

    fn matches_condition(condition: &FilterCondition, metadata: &Metadata) -> bool {
        match condition {
            FilterCondition::Equals { field, value } => {
                metadata.get(field).map(|v| v == value).unwrap_or(false)
            }
            FilterCondition::NotEquals { field, value } => {
                metadata.get(field).map(|v| v != value).unwrap_or(true)
            }
            FilterCondition::GreaterThan { field, value } => metadata
                .get(field)
                .and_then(|v| v.as_f64())
                .map(|v| v > *value)
                .unwrap_or(false),
            FilterCondition::LessThan { field, value } => metadata
                .get(field)
                .and_then(|v| v.as_f64())
                .map(|v| v < *value)
                .unwrap_or(false),
            FilterCondition::GreaterEqual { field, value } => metadata
                .get(field)
                .and_then(|v| v.as_f64())
                .map(|v| v >= *value)
                .unwrap_or(false),
            FilterCondition::LessEqual { field, value } => metadata
                .get(field)
                .and_then(|v| v.as_f64())
                .map(|v| v <= *value)
                .unwrap_or(false),
            FilterCondition::Contains { field, value } => metadata
                .get(field)
                .and_then(|v| v.as_str())
                .map(|v| v.contains(value.as_str()))
                .unwrap_or(false),
            FilterCondition::And(conditions) => conditions
                .iter()
                .all(|c| Self::matches_condition(c, metadata)),
            FilterCondition::Or(conditions) => conditions
                .iter()
                .any(|c| Self::matches_condition(c, metadata)),
            FilterCondition::Not(condition) => !Self::matches_condition(condition, metadata),
        }
    }
}

impl Filter for MetadataFilter {
    fn matches(&self, metadata: &Metadata) -> bool {
        Self::matches_condition(&self.condition, metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job_metadata() -> Metadata {
        let mut m = Metadata::new();
        m.insert("company".to_string(), json!("Acme"));
        m.insert("title".to_string(), json!("Senior Rust Engineer"));
        m.insert("salaryMax".to_string(), json!(180000));
        m
    }

    #[test]
    fn test_equals() {
        let filter = MetadataFilter::new(FilterCondition::Equals {
            field: "company".to_string(),
            value: json!("Acme"),
        });
        assert!(filter.matches(&job_metadata()));

        let filter = MetadataFilter::new(FilterCondition::Equals {
            field: "company".to_string(),
            value: json!("Globex"),
        });
        assert!(!filter.matches(&job_metadata()));
    }

    #[test]
    fn test_contains() {
        let filter = MetadataFilter::new(FilterCondition::Contains {
            field: "title".to_string(),
            value: "Rust".to_string(),
        });
        assert!(filter.matches(&job_metadata()));
    }

    #[test]
    fn test_numeric_comparison() {
        let filter = MetadataFilter::new(FilterCondition::GreaterEqual {
            field: "salaryMax".to_string(),
            value: 150000.0,
        });
        assert!(filter.matches(&job_metadata()));
    }

    #[test]
    fn test_and_or_not() {
        let filter = MetadataFilter::new(FilterCondition::And(vec![
            FilterCondition::Equals {
                field: "company".to_string(),
                value: json!("Acme"),
            },
            FilterCondition::Not(Box::new(FilterCondition::Contains {
                field: "title".to_string(),
                value: "Intern".to_string(),
            })),
        ]));
        assert!(filter.matches(&job_metadata()));
    }

    #[test]
    fn test_missing_field() {
        let filter = MetadataFilter::new(FilterCondition::Equals {
            field: "missing".to_string(),
            value: json!("x"),
        });
        assert!(!filter.matches(&job_metadata()));
    }
}
