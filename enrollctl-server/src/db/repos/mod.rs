//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Parameterized statements only (no string-built SQL)
//! - Connections are acquired from the pool per call and released on
//!   every exit path

pub mod students;

pub use students::{DbError, StudentRepo};
