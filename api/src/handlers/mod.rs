//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod departments;
pub mod employees;

pub use departments::{
    create_department, delete_department, get_department, get_random_department,
    list_departments, update_department,
};
pub use employees::{
    create_employee, delete_employee, get_employee, get_random_employee, list_employees,
    update_employee,
};
