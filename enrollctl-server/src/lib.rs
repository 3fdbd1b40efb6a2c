//! enrollctl-server: HTTP intake for student enrolment records
//!
//! Accepts a form-encoded submission (name, email, age), validates it at
//! construction, and persists it with a single parameterized insert.

pub mod db;
pub mod http;
pub mod models;

pub use http::server::{run_server, AppState, ServerConfig};
