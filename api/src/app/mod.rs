//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate input and coordinate repository ports.

pub mod department_service;
pub mod employee_service;

pub use department_service::DepartmentService;
pub use employee_service::EmployeeService;
