//! Department domain entity
//!
//! A named organizational unit employees can point at.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::validation::{optional_string, present, required_string, ValidationErrors};

/// Unique identifier for a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub Uuid);

impl DepartmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DepartmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DepartmentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DepartmentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A stored department
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

/// Data needed to create a new department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
}

/// Partial update of a department. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentPatch {
    pub name: Option<String>,
}

impl DepartmentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    pub fn apply(&self, department: &mut Department) {
        if let Some(name) = &self.name {
            department.name = name.clone();
        }
    }
}

/// Unvalidated department input as received from a client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentDraft {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
}

impl DepartmentDraft {
    /// Validate a draft for creation: `name` must be a non-empty string.
    pub fn validate(self) -> Result<NewDepartment, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = required_string(&mut errors, "name", self.name);

        match name {
            Some(name) if errors.is_empty() => Ok(NewDepartment { name }),
            _ => Err(errors),
        }
    }

    /// Validate a draft as a partial update
    pub fn validate_patch(self) -> Result<DepartmentPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = optional_string(&mut errors, "name", self.name);

        if errors.is_empty() {
            Ok(DepartmentPatch { name })
        } else {
            Err(errors)
        }
    }
}
