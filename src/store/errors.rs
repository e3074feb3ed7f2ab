//! # Store Errors

use rusqlite::ffi;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by the persistence layer.
///
/// Constraint violations are classified from SQLite's extended result codes;
/// the failing statement has already been rolled back when they are returned.
#[derive(Debug, Error)]
pub enum StoreError {
    /// UNIQUE constraint violated. Holds the `table.column` SQLite reports.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Foreign key references a row that does not exist
    #[error("Foreign key constraint failed")]
    ForeignKeyViolation,

    #[error("Database error: {0}")]
    Database(tokio_rusqlite::Error),
}

impl StoreError {
    /// Table whose uniqueness constraint was violated, if this is a duplicate
    pub fn duplicate_table(&self) -> Option<&str> {
        match self {
            StoreError::DuplicateKey(target) => target.split('.').next(),
            _ => None,
        }
    }
}

impl From<tokio_rusqlite::Error> for StoreError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(code, message)) =
            &err
        {
            match code.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    // "UNIQUE constraint failed: article.name"
                    let target = message
                        .as_deref()
                        .and_then(|m| m.rsplit(": ").next())
                        .unwrap_or_default()
                        .to_string();
                    return StoreError::DuplicateKey(target);
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => return StoreError::ForeignKeyViolation,
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::from(tokio_rusqlite::Error::Rusqlite(err))
    }
}
