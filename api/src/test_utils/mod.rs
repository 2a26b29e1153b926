//! Test utilities
//!
//! Manual in-memory repositories and test fixtures for unit testing.
//! The repositories keep real state, so a write followed by a read behaves
//! like the store.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
