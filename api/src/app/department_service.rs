//! Department service
//!
//! CRUD over departments. Validation happens here, before the repository is
//! touched.

use std::sync::Arc;

use rand::Rng;

use crate::domain::entities::{Department, DepartmentDraft, DepartmentId};
use crate::domain::ports::DepartmentRepository;
use crate::error::{AppError, DomainError};

/// Service for managing departments
pub struct DepartmentService<DR = dyn DepartmentRepository>
where
    DR: DepartmentRepository + ?Sized,
{
    departments: Arc<DR>,
}

impl<DR> DepartmentService<DR>
where
    DR: DepartmentRepository + ?Sized,
{
    pub fn new(departments: Arc<DR>) -> Self {
        Self { departments }
    }

    /// List every department
    pub async fn list(&self) -> Result<Vec<Department>, AppError> {
        Ok(self.departments.find_all().await?)
    }

    /// Pick one department uniformly at random
    pub async fn get_random(&self) -> Result<Department, AppError> {
        let count = self.departments.count().await?;
        if count == 0 {
            return Err(not_found("No departments found"));
        }

        let offset = rand::thread_rng().gen_range(0..count);
        self.departments
            .find_nth(offset)
            .await?
            .ok_or_else(|| not_found("No departments found"))
    }

    /// Get a department by ID
    pub async fn get_by_id(&self, id: &DepartmentId) -> Result<Department, AppError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| department_not_found(id))
    }

    /// Validate and store a new department
    pub async fn create(&self, draft: DepartmentDraft) -> Result<Department, AppError> {
        let new_department = draft.validate()?;
        let department = self.departments.create(&new_department).await?;

        tracing::info!("Created department {} ({})", department.id, department.name);
        Ok(department)
    }

    /// Validate and apply a partial update
    pub async fn update(
        &self,
        id: &DepartmentId,
        draft: DepartmentDraft,
    ) -> Result<Department, AppError> {
        let patch = draft.validate_patch()?;
        let department = self
            .departments
            .update(id, &patch)
            .await?
            .ok_or_else(|| department_not_found(id))?;

        tracing::debug!("Updated department {}", id);
        Ok(department)
    }

    /// Delete a department, returning the removed record.
    ///
    /// Employees pointing at it keep their reference.
    pub async fn delete(&self, id: &DepartmentId) -> Result<Department, AppError> {
        let department = self
            .departments
            .delete(id)
            .await?
            .ok_or_else(|| department_not_found(id))?;

        tracing::info!("Deleted department {}", id);
        Ok(department)
    }

    /// Delete every department, returning how many were removed
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let removed = self.departments.delete_all().await?;
        tracing::info!("Deleted {} departments", removed);
        Ok(removed)
    }
}

fn not_found(message: &str) -> AppError {
    AppError::Domain(DomainError::NotFound(message.to_string()))
}

fn department_not_found(id: &DepartmentId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Department {} not found", id)))
}
