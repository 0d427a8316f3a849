//! # Database Error Types
//!
//! Every repository call returns [`DbResult`]. The API layer decides the
//! HTTP status from the call site (read vs write), not from the variant, so
//! the variants here only describe *what* went wrong in SQLite terms.
//!
//! ```text
//! sqlx::Error / MigrateError ──From──► DbError ──ApiError::read/write──► { "error": .. }
//! ```

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The database file could not be opened or created.
    #[error("Could not open database: {0}")]
    Open(String),

    /// An embedded migration did not apply.
    #[error("Schema migration failed: {0}")]
    Migration(String),

    /// A CHECK or NOT NULL rule in the schema rejected the row
    /// (negative price, commission outside 0..=100, ...).
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// Any other error reported by SQLite for a statement.
    #[error("Query failed: {0}")]
    Query(String),

    /// The pool was closed (shutdown in progress).
    #[error("Database is closed")]
    Closed,

    /// No connection became free within the acquire timeout.
    #[error("Timed out waiting for a database connection")]
    Busy,

    /// A stored row could not be turned back into a domain value: the
    /// `services_json` snapshot or the `sale_date` text is malformed.
    #[error("Corrupt {entity} row {id}: {reason}")]
    Decode {
        entity: String,
        id: i64,
        reason: String,
    },

    /// A value could not be prepared for storage.
    #[error("Could not encode {0}")]
    Encode(String),

    #[error("Database error: {0}")]
    Other(String),
}

impl DbError {
    /// Creates a Decode error for a stored row.
    pub fn decode(entity: impl Into<String>, id: i64, reason: impl ToString) -> Self {
        DbError::Decode {
            entity: entity.into(),
            id,
            reason: reason.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();
                // SQLite reports "CHECK constraint failed: ..." / "NOT NULL constraint failed: ..."
                if msg.contains("constraint failed") {
                    DbError::Constraint(msg)
                } else {
                    DbError::Query(msg)
                }
            }
            sqlx::Error::PoolClosed => DbError::Closed,
            sqlx::Error::PoolTimedOut => DbError::Busy,
            other => DbError::Other(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::Migration(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
