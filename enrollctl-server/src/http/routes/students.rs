//! Student enrolment endpoint
//!
//! One POST route: validate the form, insert the record, answer with a
//! plain-text literal. Any other method on the route is rejected by the
//! router before validation or database work happens.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Form, Router,
};
use serde::Deserialize;

use crate::db::StudentRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::StudentRecord;

/// Response body for a persisted record.
pub const RECORD_ADDED: &str = "Student record added successfully!";

/// Raw enrolment form
///
/// Fields default to empty so a missing field flows through validation
/// and yields the same generic rejection as a malformed one.
#[derive(Debug, Deserialize)]
pub struct StudentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: String,
}

/// POST /students - validate and persist one enrolment record
async fn create_student(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StudentForm>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let record = StudentRecord::new(&form.name, &form.email, &form.age)?;

    StudentRepo::new(&state.pool).insert(&record).await?;

    tracing::info!(email = %record.email(), "student record added");
    Ok((StatusCode::CREATED, RECORD_ADDED))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/students", post(create_student))
}
