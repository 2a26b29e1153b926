//! Domain entities
//!
//! Pure domain models for the company directory.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod department;
pub mod employee;

pub use department::{Department, DepartmentDraft, DepartmentId, DepartmentPatch, NewDepartment};
pub use employee::{
    DepartmentRef, Employee, EmployeeDraft, EmployeeFilter, EmployeeId, EmployeePatch,
    EmployeeView, NewEmployee,
};
