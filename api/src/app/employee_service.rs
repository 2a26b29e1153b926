//! Employee service
//!
//! CRUD over employees, including bulk operations and optional expansion of
//! the department reference.
//!
//! The department field is never checked against stored departments on
//! write. On read with expansion, references that resolve are replaced by the
//! department record and the rest are returned as stored.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;

use crate::domain::entities::{
    Department, DepartmentId, Employee, EmployeeDraft, EmployeeFilter, EmployeeId, EmployeeView,
};
use crate::domain::ports::{DepartmentRepository, EmployeeRepository};
use crate::error::{AppError, DomainError};

/// Service for managing employees
pub struct EmployeeService<ER = dyn EmployeeRepository, DR = dyn DepartmentRepository>
where
    ER: EmployeeRepository + ?Sized,
    DR: DepartmentRepository + ?Sized,
{
    employees: Arc<ER>,
    departments: Arc<DR>,
}

impl<ER, DR> EmployeeService<ER, DR>
where
    ER: EmployeeRepository + ?Sized,
    DR: DepartmentRepository + ?Sized,
{
    pub fn new(employees: Arc<ER>, departments: Arc<DR>) -> Self {
        Self {
            employees,
            departments,
        }
    }

    /// List every employee
    pub async fn list(&self, expand: bool) -> Result<Vec<EmployeeView>, AppError> {
        let employees = self.employees.find(&EmployeeFilter::all()).await?;
        self.to_views(employees, expand).await
    }

    /// Every employee matching `filter`
    pub async fn find(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, AppError> {
        Ok(self.employees.find(filter).await?)
    }

    /// The first employee matching `filter`, if any
    pub async fn find_one(&self, filter: &EmployeeFilter) -> Result<Option<Employee>, AppError> {
        Ok(self.employees.find_one(filter).await?)
    }

    /// Pick one employee uniformly at random
    pub async fn get_random(&self, expand: bool) -> Result<EmployeeView, AppError> {
        let count = self.employees.count().await?;
        if count == 0 {
            return Err(not_found("No employees found"));
        }

        let offset = rand::thread_rng().gen_range(0..count);
        let employee = self
            .employees
            .find_nth(offset)
            .await?
            .ok_or_else(|| not_found("No employees found"))?;

        self.to_view(employee, expand).await
    }

    /// Get an employee by ID
    pub async fn get_by_id(&self, id: &EmployeeId, expand: bool) -> Result<EmployeeView, AppError> {
        let employee = self.fetch(id).await?;
        self.to_view(employee, expand).await
    }

    /// Get the stored employee, without expansion
    pub async fn fetch(&self, id: &EmployeeId) -> Result<Employee, AppError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    /// Validate and store a new employee.
    ///
    /// The department is stored as given, whether or not it names an
    /// existing department.
    pub async fn create(&self, draft: EmployeeDraft) -> Result<Employee, AppError> {
        let new_employee = draft.validate()?;
        let employee = self.employees.create(&new_employee).await?;

        tracing::info!(
            "Created employee {} ({} {})",
            employee.id,
            employee.first_name,
            employee.last_name
        );
        Ok(employee)
    }

    /// Validate and apply a partial update in a single write
    pub async fn update(&self, id: &EmployeeId, draft: EmployeeDraft) -> Result<Employee, AppError> {
        let patch = draft.validate_patch()?;
        let employee = self
            .employees
            .update(id, &patch)
            .await?
            .ok_or_else(|| employee_not_found(id))?;

        tracing::debug!("Updated employee {}", id);
        Ok(employee)
    }

    /// Persist an employee that was fetched and modified in memory
    pub async fn save(&self, employee: &Employee) -> Result<Employee, AppError> {
        employee.validate()?;

        let saved = self
            .employees
            .save(employee)
            .await?
            .ok_or_else(|| employee_not_found(&employee.id))?;

        tracing::debug!("Saved employee {}", employee.id);
        Ok(saved)
    }

    /// Apply a validated patch to every employee matching `filter`.
    ///
    /// Returns how many employees were modified.
    pub async fn update_many(
        &self,
        filter: &EmployeeFilter,
        draft: EmployeeDraft,
    ) -> Result<u64, AppError> {
        let patch = draft.validate_patch()?;
        let modified = self.employees.update_many(filter, &patch).await?;

        tracing::info!("Updated {} employees", modified);
        Ok(modified)
    }

    /// Delete an employee, returning the removed record
    pub async fn delete(&self, id: &EmployeeId) -> Result<Employee, AppError> {
        let employee = self
            .employees
            .delete(id)
            .await?
            .ok_or_else(|| employee_not_found(id))?;

        tracing::info!("Deleted employee {}", id);
        Ok(employee)
    }

    /// Delete every employee matching `filter`, returning how many were removed
    pub async fn delete_many(&self, filter: &EmployeeFilter) -> Result<u64, AppError> {
        let removed = self.employees.delete_many(filter).await?;
        tracing::info!("Deleted {} employees", removed);
        Ok(removed)
    }

    async fn to_view(&self, employee: Employee, expand: bool) -> Result<EmployeeView, AppError> {
        if !expand {
            return Ok(employee.into());
        }

        let department = match employee.department_id() {
            Some(id) => self.departments.find_by_id(&id).await?,
            None => None,
        };

        Ok(employee.into_view(department))
    }

    async fn to_views(
        &self,
        employees: Vec<Employee>,
        expand: bool,
    ) -> Result<Vec<EmployeeView>, AppError> {
        if !expand {
            return Ok(employees.into_iter().map(EmployeeView::from).collect());
        }

        let mut ids: Vec<DepartmentId> = employees
            .iter()
            .filter_map(Employee::department_id)
            .collect();
        ids.sort();
        ids.dedup();

        let departments: HashMap<DepartmentId, Department> = self
            .departments
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();

        Ok(employees
            .into_iter()
            .map(|employee| {
                let department = employee
                    .department_id()
                    .and_then(|id| departments.get(&id).cloned());
                employee.into_view(department)
            })
            .collect())
    }
}

fn not_found(message: &str) -> AppError {
    AppError::Domain(DomainError::NotFound(message.to_string()))
}

fn employee_not_found(id: &EmployeeId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Employee {} not found", id)))
}
