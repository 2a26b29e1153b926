//! SeaORM entities
//!
//! Table-level models. Domain code never sees these; the PostgreSQL
//! adapters convert them into `domain::entities` types.

pub mod departments;
pub mod employees;
