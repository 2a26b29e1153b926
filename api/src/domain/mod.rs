//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing employees and departments
//! - `ports`: Trait definitions for persistence
//! - `validation`: Field checks applied before anything is stored

pub mod entities;
pub mod ports;
pub mod validation;
