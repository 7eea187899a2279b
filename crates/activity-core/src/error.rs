//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Not found")]
    ActivityNotFound,

    #[error("Deleted")]
    ActivityDeleted,

    #[error("endDateTime is less than startDateTime")]
    EndBeforeStart,

    #[error("Malformed id: {0}")]
    MalformedId(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already taken: {0}")]
    UsernameAlreadyExists(String),

    #[error("Session invalid or expired")]
    SessionInvalid,

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
