use sea_orm::sqlx::{self, error::ErrorKind};
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;
use tracing::debug;

/// Error types for account and survey record operations
#[derive(Error, Debug)]
pub enum AccountError {
    /// The login identifier was empty or missing
    #[error("An email address must be provided")]
    EmptyEmail,

    /// No user exists with the given id
    #[error("User not found: {0}")]
    UserNotFound(i32),

    /// No user has the given login email
    #[error("No user with email: {0}")]
    UnknownEmail(String),

    /// The store rejected a write because of a uniqueness or foreign key constraint
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store rejected a value outside its declared range or choice set
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// The password hashing backend failed
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Any other error from the database, passed through unchanged
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for AccountError {
    fn from(error: DbErr) -> Self {
        match error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message))
            | Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                debug!(%message, "Write rejected by constraint");
                AccountError::ConstraintViolation(message)
            }
            _ => match check_violation(&error) {
                Some(message) => {
                    debug!(%message, "Write rejected by check constraint");
                    AccountError::InvalidValue(message)
                }
                None => AccountError::Database(error),
            },
        }
    }
}

/// Message of a failed CHECK constraint, if that is what `error` is.
fn check_violation(error: &DbErr) -> Option<String> {
    let (DbErr::Exec(runtime) | DbErr::Query(runtime)) = error else {
        return None;
    };
    match runtime {
        RuntimeErr::SqlxError(sqlx::Error::Database(e))
            if matches!(e.kind(), ErrorKind::CheckViolation) =>
        {
            Some(e.message().to_string())
        }
        _ => None,
    }
}

impl From<argon2::password_hash::Error> for AccountError {
    fn from(error: argon2::password_hash::Error) -> Self {
        AccountError::PasswordHash(error.to_string())
    }
}

impl AccountError {
    /// Whether the caller has to correct the submitted data before retrying.
    pub fn is_rejected_write(&self) -> bool {
        matches!(
            self,
            AccountError::EmptyEmail
                | AccountError::ConstraintViolation(_)
                | AccountError::InvalidValue(_)
        )
    }
}

/// Type alias for Result with AccountError
pub type Result<T> = std::result::Result<T, AccountError>;
