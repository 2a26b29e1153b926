//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.
//! Records are kept in ID order, matching the PostgreSQL adapters' `find_nth`.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Department, DepartmentId, DepartmentPatch, Employee, EmployeeFilter, EmployeeId,
    EmployeePatch, NewDepartment, NewEmployee,
};
use crate::domain::ports::{DepartmentRepository, EmployeeRepository};
use crate::error::DomainError;

fn mock_failure() -> DomainError {
    DomainError::Database("Mock failure".to_string())
}

// ============================================================================
// In-Memory Department Repository
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryDepartmentRepository {
    departments: Arc<RwLock<BTreeMap<DepartmentId, Department>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Pre-populate with a department for testing
    pub fn with_department(self, department: Department) -> Self {
        {
            let mut departments = self.departments.write().unwrap();
            departments.insert(department.id, department);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.departments.read().unwrap().len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(mock_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        self.check()?;
        let departments = self.departments.read().unwrap();
        Ok(departments.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError> {
        self.check()?;
        let departments = self.departments.read().unwrap();
        Ok(departments.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[DepartmentId]) -> Result<Vec<Department>, DomainError> {
        self.check()?;
        let departments = self.departments.read().unwrap();
        Ok(ids.iter().filter_map(|id| departments.get(id).cloned()).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.departments.read().unwrap().len() as u64)
    }

    async fn find_nth(&self, offset: u64) -> Result<Option<Department>, DomainError> {
        self.check()?;
        let departments = self.departments.read().unwrap();
        Ok(departments.values().nth(offset as usize).cloned())
    }

    async fn create(&self, new_department: &NewDepartment) -> Result<Department, DomainError> {
        self.check()?;
        let department = Department {
            id: DepartmentId::new(),
            name: new_department.name.clone(),
        };

        let mut departments = self.departments.write().unwrap();
        departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn update(
        &self,
        id: &DepartmentId,
        patch: &DepartmentPatch,
    ) -> Result<Option<Department>, DomainError> {
        self.check()?;
        let mut departments = self.departments.write().unwrap();
        Ok(departments.get_mut(id).map(|department| {
            patch.apply(department);
            department.clone()
        }))
    }

    async fn delete(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError> {
        self.check()?;
        let mut departments = self.departments.write().unwrap();
        Ok(departments.remove(id))
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        self.check()?;
        let mut departments = self.departments.write().unwrap();
        let removed = departments.len() as u64;
        departments.clear();
        Ok(removed)
    }
}

// ============================================================================
// In-Memory Employee Repository
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<BTreeMap<EmployeeId, Employee>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Pre-populate with an employee for testing
    pub fn with_employee(self, employee: Employee) -> Self {
        {
            let mut employees = self.employees.write().unwrap();
            employees.insert(employee.id, employee);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.employees.read().unwrap().len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(mock_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError> {
        self.check()?;
        let employees = self.employees.read().unwrap();
        Ok(employees
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn find_one(&self, filter: &EmployeeFilter) -> Result<Option<Employee>, DomainError> {
        self.check()?;
        let employees = self.employees.read().unwrap();
        Ok(employees.values().find(|e| filter.matches(e)).cloned())
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        self.check()?;
        let employees = self.employees.read().unwrap();
        Ok(employees.get(id).cloned())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.employees.read().unwrap().len() as u64)
    }

    async fn find_nth(&self, offset: u64) -> Result<Option<Employee>, DomainError> {
        self.check()?;
        let employees = self.employees.read().unwrap();
        Ok(employees.values().nth(offset as usize).cloned())
    }

    async fn create(&self, new_employee: &NewEmployee) -> Result<Employee, DomainError> {
        self.check()?;
        let employee = Employee {
            id: EmployeeId::new(),
            first_name: new_employee.first_name.clone(),
            last_name: new_employee.last_name.clone(),
            department: new_employee.department.clone(),
        };

        let mut employees = self.employees.write().unwrap();
        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: &EmployeeId,
        patch: &EmployeePatch,
    ) -> Result<Option<Employee>, DomainError> {
        self.check()?;
        let mut employees = self.employees.write().unwrap();
        Ok(employees.get_mut(id).map(|employee| {
            patch.apply(employee);
            employee.clone()
        }))
    }

    async fn save(&self, employee: &Employee) -> Result<Option<Employee>, DomainError> {
        self.check()?;
        let mut employees = self.employees.write().unwrap();
        Ok(employees.get_mut(&employee.id).map(|stored| {
            *stored = employee.clone();
            stored.clone()
        }))
    }

    async fn update_many(
        &self,
        filter: &EmployeeFilter,
        patch: &EmployeePatch,
    ) -> Result<u64, DomainError> {
        self.check()?;
        if patch.is_empty() {
            return Ok(0);
        }

        let mut employees = self.employees.write().unwrap();
        let mut modified = 0;
        for employee in employees.values_mut().filter(|e| filter.matches(e)) {
            patch.apply(employee);
            modified += 1;
        }
        Ok(modified)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        self.check()?;
        let mut employees = self.employees.write().unwrap();
        Ok(employees.remove(id))
    }

    async fn delete_many(&self, filter: &EmployeeFilter) -> Result<u64, DomainError> {
        self.check()?;
        let mut employees = self.employees.write().unwrap();
        let before = employees.len();
        employees.retain(|_, e| !filter.matches(e));
        Ok((before - employees.len()) as u64)
    }
}
