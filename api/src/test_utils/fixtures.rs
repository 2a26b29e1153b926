//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use uuid::Uuid;

use crate::domain::entities::{Department, DepartmentId, Employee, EmployeeId};

/// Create a test department with default values
pub fn test_department() -> Department {
    test_department_named("Testing")
}

/// Create a test department with a specific name
pub fn test_department_named(name: &str) -> Department {
    Department {
        id: DepartmentId(Uuid::new_v4()),
        name: name.to_string(),
    }
}

/// Create a test employee.
///
/// `department` is stored verbatim, so pass a department id to get a
/// resolvable reference or any other text for a free-text one.
pub fn test_employee(first_name: &str, last_name: &str, department: &str) -> Employee {
    Employee {
        id: EmployeeId(Uuid::new_v4()),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        department: department.to_string(),
    }
}
