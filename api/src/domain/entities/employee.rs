//! Employee domain entity
//!
//! An employee names their department by a plain string. It usually holds a
//! department id but free text is accepted too, so the reference is only
//! resolved on request and never checked on write.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::department::{Department, DepartmentId};
use crate::domain::validation::{optional_string, present, required_string, ValidationErrors};

/// Unique identifier for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EmployeeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
}

impl Employee {
    /// The department id this employee points at, if the reference is one
    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department.parse().ok()
    }

    /// Check the stored-record invariant: every field is a non-empty string
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("department", &self.department),
        ] {
            if value.trim().is_empty() {
                errors.push(field, "is required");
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build a view, embedding `department` when it was resolved
    pub fn into_view(self, department: Option<Department>) -> EmployeeView {
        let department = match department {
            Some(d) => DepartmentRef::Expanded(d),
            None => DepartmentRef::Reference(self.department),
        };

        EmployeeView {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            department,
        }
    }
}

/// The department field of an employee as returned to callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentRef {
    /// The raw stored value
    Reference(String),
    /// The referenced department record
    Expanded(Department),
}

/// An employee with its department reference optionally expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeView {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub department: DepartmentRef,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        employee.into_view(None)
    }
}

/// Data needed to create a new employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
}

/// Partial update of an employee. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.department.is_none()
    }

    pub fn apply(&self, employee: &mut Employee) {
        if let Some(first_name) = &self.first_name {
            employee.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            employee.last_name = last_name.clone();
        }
        if let Some(department) = &self.department {
            employee.department = department.clone();
        }
    }
}

/// Equality match on employee fields. An empty filter matches everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
}

impl EmployeeFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self
    }

    pub fn last_name(mut self, last_name: &str) -> Self {
        self.last_name = Some(last_name.to_string());
        self
    }

    pub fn department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        fn field_matches(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().map_or(true, |e| e == actual)
        }

        field_matches(&self.first_name, &employee.first_name)
            && field_matches(&self.last_name, &employee.last_name)
            && field_matches(&self.department, &employee.department)
    }
}

/// Unvalidated employee input as received from a client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[serde(default, deserialize_with = "present")]
    pub first_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub last_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub department: Option<Value>,
}

impl EmployeeDraft {
    /// Validate a draft for creation.
    ///
    /// All three fields must be non-empty strings. Every failing field is
    /// reported, not just the first.
    pub fn validate(self) -> Result<NewEmployee, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let first_name = required_string(&mut errors, "firstName", self.first_name);
        let last_name = required_string(&mut errors, "lastName", self.last_name);
        let department = required_string(&mut errors, "department", self.department);

        match (first_name, last_name, department) {
            (Some(first_name), Some(last_name), Some(department)) if errors.is_empty() => {
                Ok(NewEmployee {
                    first_name,
                    last_name,
                    department,
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate a draft as a partial update
    pub fn validate_patch(self) -> Result<EmployeePatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let patch = EmployeePatch {
            first_name: optional_string(&mut errors, "firstName", self.first_name),
            last_name: optional_string(&mut errors, "lastName", self.last_name),
            department: optional_string(&mut errors, "department", self.department),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: Value) -> EmployeeDraft {
        serde_json::from_value(value).unwrap()
    }

    fn employee(department: &str) -> Employee {
        Employee {
            id: EmployeeId::new(),
            first_name: "Amanda".to_string(),
            last_name: "Doe".to_string(),
            department: department.to_string(),
        }
    }

    #[test]
    fn validate_rejects_non_string_fields() {
        let cases = [
            (json!({"firstName": {}, "lastName": "Doe", "department": "IT"}), "firstName"),
            (json!({"firstName": "Alicia", "lastName": [], "department": "IT"}), "lastName"),
            (json!({"firstName": "Alicia", "lastName": "Doe", "department": {}}), "department"),
        ];

        for (input, field) in cases {
            let errors = draft(input).validate().unwrap_err();
            assert!(errors.contains(field), "expected error on {}", field);
            assert_eq!(errors.fields().len(), 1);
        }
    }

    #[test]
    fn validate_reports_every_missing_field() {
        let errors = draft(json!({})).validate().unwrap_err();
        assert!(errors.contains("firstName"));
        assert!(errors.contains("lastName"));
        assert!(errors.contains("department"));
    }

    #[test]
    fn validate_accepts_well_formed_triples() {
        let cases = [
            ("Amanda", "Doe", "Accountant"),
            ("Jamal", "Kalu", "Testing"),
            ("Alicia", "Doe", "IT"),
        ];

        for (first, last, department) in cases {
            let new = draft(json!({
                "firstName": first,
                "lastName": last,
                "department": department,
            }))
            .validate()
            .unwrap();
            assert_eq!(new.first_name, first);
            assert_eq!(new.last_name, last);
            assert_eq!(new.department, department);
        }
    }

    #[test]
    fn validate_patch_keeps_only_present_fields() {
        let patch = draft(json!({"firstName": "Alicia"}))
            .validate_patch()
            .unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Alicia"));
        assert!(patch.last_name.is_none());
        assert!(patch.department.is_none());
    }

    #[test]
    fn validate_patch_rejects_wrong_type() {
        let errors = draft(json!({"department": 7})).validate_patch().unwrap_err();
        assert!(errors.contains("department"));
    }

    #[test]
    fn patch_apply_changes_only_set_fields() {
        let mut e = employee("IT");
        EmployeePatch {
            last_name: Some("Smith".to_string()),
            ..Default::default()
        }
        .apply(&mut e);
        assert_eq!(e.first_name, "Amanda");
        assert_eq!(e.last_name, "Smith");
        assert_eq!(e.department, "IT");
    }

    #[test]
    fn employee_validate_flags_blank_fields() {
        let mut e = employee("IT");
        assert!(e.validate().is_ok());

        e.first_name = " ".to_string();
        e.department = String::new();
        let errors = e.validate().unwrap_err();
        assert!(errors.contains("firstName"));
        assert!(errors.contains("department"));
        assert!(!errors.contains("lastName"));
    }

    #[test]
    fn department_id_only_for_uuid_references() {
        let id = DepartmentId::new();
        assert_eq!(employee(&id.to_string()).department_id(), Some(id));
        assert_eq!(employee("IT").department_id(), None);
    }

    #[test]
    fn into_view_embeds_resolved_department() {
        let department = Department {
            id: DepartmentId::new(),
            name: "Testing".to_string(),
        };
        let view = employee(&department.id.to_string()).into_view(Some(department.clone()));
        assert_eq!(view.department, DepartmentRef::Expanded(department));
    }

    #[test]
    fn into_view_keeps_raw_reference() {
        let view: EmployeeView = employee("IT").into();
        assert_eq!(view.department, DepartmentRef::Reference("IT".to_string()));
    }

    #[test]
    fn filter_matches_on_set_fields() {
        let e = employee("IT");
        assert!(EmployeeFilter::all().matches(&e));
        assert!(EmployeeFilter::all().first_name("Amanda").matches(&e));
        assert!(EmployeeFilter::all()
            .first_name("Amanda")
            .department("IT")
            .matches(&e));
        assert!(!EmployeeFilter::all().first_name("Jamal").matches(&e));
        assert!(!EmployeeFilter::all().last_name("Kalu").matches(&e));
    }
}
