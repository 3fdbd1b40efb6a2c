//! Student repository
//!
//! Single write path: a parameterized three-column insert. The record
//! handed in is already validated, so binding is the only defense the
//! statement needs.

use sqlx::PgPool;

use crate::models::StudentRecord;

/// Database error type
///
/// Connection-level failures are split out so the HTTP layer can
/// surface the "try again later" message for them and the generic
/// write-failure message for everything else.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("connection unavailable: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Sqlx(#[source] sqlx::Error),

    #[error("insert reported no rows written")]
    WriteFailed,
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(e),
            _ => Self::Sqlx(e),
        }
    }
}

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one validated record into `students`.
    ///
    /// Binds exactly (name, email, age) in column order. The prepared
    /// statement and the pooled connection are both released when the
    /// call returns, success or failure. Not retried.
    pub async fn insert(&self, record: &StudentRecord) -> Result<(), DbError> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES ($1, $2, $3)")
            .bind(record.name())
            .bind(record.email())
            .bind(record.age())
            .execute(self.pool)
            .await?;

        if result.rows_affected() != 1 {
            return Err(DbError::WriteFailed);
        }

        Ok(())
    }
}
