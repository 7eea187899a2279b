//! API error type mapping domain outcomes to HTTP responses
//!
//! Every error body is `{"error": "<message>"}` with the exact wire
//! messages the clients assert on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use activity_core::error::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not found")]
    NotFound,

    #[error("Deleted")]
    Deleted,

    #[error("{0}")]
    Conflict(String),

    #[error("Error retrieving from database")]
    StoreError,

    #[error("Internal server error")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EndBeforeStart => ApiError::BadRequest(err.to_string()),
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::ActivityNotFound | DomainError::UserNotFound => ApiError::NotFound,
            DomainError::ActivityDeleted => ApiError::Deleted,
            DomainError::InvalidCredentials => ApiError::InvalidCredentials,
            DomainError::SessionInvalid => ApiError::Unauthorized,
            DomainError::UsernameAlreadyExists(_) => {
                ApiError::Conflict("Username already taken".to_string())
            }
            DomainError::MalformedId(_) | DomainError::DatabaseError(_) => ApiError::StoreError,
            DomainError::PasswordHashError(msg) | DomainError::InternalError(msg) => {
                ApiError::InternalError(msg)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::InvalidCredentials => {
                tracing::warn!("Invalid credentials");
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            ApiError::NotFound | ApiError::Deleted => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::StoreError => {
                tracing::error!("Store error surfaced to client");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_wire_messages() {
        let err: ApiError = DomainError::EndBeforeStart.into();
        assert_eq!(err.to_string(), "endDateTime is less than startDateTime");

        let err: ApiError = DomainError::ActivityDeleted.into();
        assert_eq!(err.to_string(), "Deleted");

        let err: ApiError = DomainError::MalformedId("aaa".into()).into();
        assert_eq!(err.to_string(), "Error retrieving from database");

        let err: ApiError = DomainError::ActivityNotFound.into();
        assert_eq!(err.to_string(), "Not found");
    }
}
