//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod student;
pub mod validation;

pub use student::StudentRecord;
pub use validation::ValidationError;
