//! Department handlers
//!
//! Endpoints for department management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Department, DepartmentDraft, DepartmentId};
use crate::error::AppError;
use crate::AppState;

/// A department as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id.to_string(),
            name: department.name,
        }
    }
}

/// GET /departments
///
/// List all departments.
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, AppError> {
    let departments = state.department_service.list().await?;

    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

/// GET /departments/random
///
/// Get one department picked at random.
pub async fn get_random_department(
    State(state): State<AppState>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let department = state.department_service.get_random().await?;

    Ok(Json(department.into()))
}

/// GET /departments/:id
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let department = state
        .department_service
        .get_by_id(&DepartmentId(id))
        .await?;

    Ok(Json(department.into()))
}

/// POST /departments
///
/// Create a department. Body: `{"name": "..."}`.
pub async fn create_department(
    State(state): State<AppState>,
    Json(draft): Json<DepartmentDraft>,
) -> Result<(StatusCode, Json<DepartmentResponse>), AppError> {
    let department = state.department_service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(department.into())))
}

/// PUT /departments/:id
///
/// Update the fields present in the body.
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<DepartmentDraft>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let department = state
        .department_service
        .update(&DepartmentId(id), draft)
        .await?;

    Ok(Json(department.into()))
}

/// DELETE /departments/:id
///
/// Delete a department and return it. Employees referencing it are untouched.
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let department = state.department_service.delete(&DepartmentId(id)).await?;

    Ok(Json(department.into()))
}
