//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod department_repo;
pub mod employee_repo;
pub mod schema;


pub use department_repo::PostgresDepartmentRepository;
pub use employee_repo::PostgresEmployeeRepository;
pub use schema::ensure_schema;
