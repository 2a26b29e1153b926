//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Department, DepartmentId, DepartmentPatch, Employee, EmployeeFilter, EmployeeId,
    EmployeePatch, NewDepartment, NewEmployee,
};
use crate::error::DomainError;

/// Repository for Department entities
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Every stored department, in store order
    async fn find_all(&self) -> Result<Vec<Department>, DomainError>;

    /// Find a department by ID
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError>;

    /// Find every department whose ID is in `ids`. Unknown IDs are skipped.
    async fn find_by_ids(&self, ids: &[DepartmentId]) -> Result<Vec<Department>, DomainError>;

    /// Number of stored departments
    async fn count(&self) -> Result<u64, DomainError>;

    /// The department at `offset` in ID order
    async fn find_nth(&self, offset: u64) -> Result<Option<Department>, DomainError>;

    /// Create a new department
    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError>;

    /// Apply a partial update. Returns `None` if the department does not exist.
    async fn update(
        &self,
        id: &DepartmentId,
        patch: &DepartmentPatch,
    ) -> Result<Option<Department>, DomainError>;

    /// Delete a department, returning it. Returns `None` if it did not exist.
    async fn delete(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError>;

    /// Delete every department, returning how many were removed
    async fn delete_all(&self) -> Result<u64, DomainError>;
}

/// Repository for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every employee matching `filter`
    async fn find(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError>;

    /// The first employee matching `filter`
    async fn find_one(&self, filter: &EmployeeFilter) -> Result<Option<Employee>, DomainError>;

    /// Find an employee by ID
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// Number of stored employees
    async fn count(&self) -> Result<u64, DomainError>;

    /// The employee at `offset` in ID order
    async fn find_nth(&self, offset: u64) -> Result<Option<Employee>, DomainError>;

    /// Create a new employee
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError>;

    /// Apply a partial update in a single write.
    /// Returns `None` if the employee does not exist.
    async fn update(
        &self,
        id: &EmployeeId,
        patch: &EmployeePatch,
    ) -> Result<Option<Employee>, DomainError>;

    /// Overwrite the stored document with `employee`.
    /// Returns `None` if it was deleted in the meantime.
    async fn save(&self, employee: &Employee) -> Result<Option<Employee>, DomainError>;

    /// Apply `patch` to every employee matching `filter`, returning how many were modified
    async fn update_many(
        &self,
        filter: &EmployeeFilter,
        patch: &EmployeePatch,
    ) -> Result<u64, DomainError>;

    /// Delete an employee, returning it. Returns `None` if it did not exist.
    async fn delete(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// Delete every employee matching `filter`, returning how many were removed
    async fn delete_many(&self, filter: &EmployeeFilter) -> Result<u64, DomainError>;
}
