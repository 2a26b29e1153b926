//! Employee handlers
//!
//! Endpoints for employee management. Read endpoints accept
//! `?expand=department` to embed the referenced department.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::departments::DepartmentResponse;
use crate::domain::entities::{DepartmentRef, Employee, EmployeeDraft, EmployeeId, EmployeeView};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for reading employees
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeQuery {
    /// Comma-separated list of references to expand. Only `department` is known.
    pub expand: Option<String>,
}

impl EmployeeQuery {
    /// Whether the department reference should be expanded
    pub fn expand_department(&self) -> Result<bool, AppError> {
        let Some(expand) = self.expand.as_deref() else {
            return Ok(false);
        };

        let mut department = false;
        for part in expand.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part {
                "department" => department = true,
                other => {
                    return Err(AppError::BadRequest(format!(
                        "Unknown expansion: {}",
                        other
                    )))
                }
            }
        }
        Ok(department)
    }
}

/// The department field of an employee response: either the stored
/// reference or the embedded department
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DepartmentField {
    Expanded(DepartmentResponse),
    Reference(String),
}

/// An employee as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: DepartmentField,
}

impl From<EmployeeView> for EmployeeResponse {
    fn from(view: EmployeeView) -> Self {
        let department = match view.department {
            DepartmentRef::Reference(reference) => DepartmentField::Reference(reference),
            DepartmentRef::Expanded(department) => DepartmentField::Expanded(department.into()),
        };

        Self {
            id: view.id.to_string(),
            first_name: view.first_name,
            last_name: view.last_name,
            department,
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeView::from(employee).into()
    }
}

/// GET /employees
///
/// List all employees.
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let expand = query.expand_department()?;
    let employees = state.employee_service.list(expand).await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// GET /employees/random
///
/// Get one employee picked at random.
pub async fn get_random_employee(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let expand = query.expand_department()?;
    let employee = state.employee_service.get_random(expand).await?;

    Ok(Json(employee.into()))
}

/// GET /employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let expand = query.expand_department()?;
    let employee = state
        .employee_service
        .get_by_id(&EmployeeId(id), expand)
        .await?;

    Ok(Json(employee.into()))
}

/// POST /employees
///
/// Create an employee. Body: `{"firstName", "lastName", "department"}`, all strings.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(draft): Json<EmployeeDraft>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    let employee = state.employee_service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// PUT /employees/:id
///
/// Update the fields present in the body.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<EmployeeDraft>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = state
        .employee_service
        .update(&EmployeeId(id), draft)
        .await?;

    Ok(Json(employee.into()))
}

/// DELETE /employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = state.employee_service.delete(&EmployeeId(id)).await?;

    Ok(Json(employee.into()))
}
