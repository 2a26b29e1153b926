//! Field validation
//!
//! Request bodies arrive loosely typed: every field is kept as a raw JSON
//! value so that a missing field and a wrongly typed field can both be
//! reported per field instead of failing deserialization as a whole.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single offending field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field that failed validation for one input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether `field` is among the offending fields
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Deserialize a field that may be absent, keeping an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "present")]`: a missing key
/// yields `None`, `null` yields `Some(Value::Null)`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Check that a required field holds a non-empty string.
///
/// Records a failure in `errors` and returns `None` when it does not.
pub fn required_string(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Value>,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => {
            errors.push(field, "is required");
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(field, "is required");
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(field, "must be a string");
            None
        }
    }
}

/// Check an optional field of a partial update.
///
/// An absent field is left alone; a present one must satisfy the same rules
/// as on creation.
pub fn optional_string(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Value>,
) -> Option<String> {
    match value {
        None => None,
        Some(v) => required_string(errors, field, Some(v)),
    }
}
