//! Error types for the store crate.

use heroes_core::{CoreError, HeroId, PowerId};
use sqlx::error::ErrorKind;

/// Errors that can occur while reading or writing the data store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The database driver failed (connection, I/O, malformed SQL).
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A field value failed domain validation before it reached the database.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database rejected a write because it violates a table constraint.
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// An association referenced a hero that does not exist.
    #[error("hero not found: {0}")]
    HeroNotFound(HeroId),

    /// An association referenced a power that does not exist.
    #[error("power not found: {0}")]
    PowerNotFound(PowerId),

    /// A stored row holds a value the domain layer refuses to load.
    #[error("corrupt row {id} in '{table}': {reason}")]
    Corrupt { table: &'static str, id: i64, reason: String },
}

impl StoreError {
    /// Returns `true` if the failure was caused by a field value rather than
    /// by the store itself.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Core(_) | StoreError::Constraint(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.kind() {
                ErrorKind::CheckViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation => {
                    return StoreError::Constraint(db.message().to_owned());
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}
