//! Credential Error Types
//!
//! This module provides credential-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! A failed password check is not represented here. `authenticate`
//! reports it as `verified: false`.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordPolicyError;
use thiserror::Error;

use crate::domain::value_object::customer_id::CustomerIdError;

/// Credential-specific result type alias
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Credential-specific error variants
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Customer id outside the accepted length range
    #[error("Invalid customer id: {0}")]
    InvalidCustomerId(#[from] CustomerIdError),

    /// Password outside the configured length range
    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    /// Body is not JSON, or lacks the expected fields
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// Customer id already has an identity record
    #[error("Customer id is already registered")]
    DuplicateIdentity,

    /// Store unreachable or failing (connection, pool timeout, query)
    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CredentialError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CredentialError::InvalidCustomerId(_)
            | CredentialError::InvalidPassword(_)
            | CredentialError::MalformedBody(_) => ErrorKind::UnprocessableEntity,
            CredentialError::DuplicateIdentity => ErrorKind::Conflict,
            CredentialError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            CredentialError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details are kept out of the message.
    pub fn to_app_error(&self) -> AppError {
        let message = match self {
            CredentialError::InvalidCustomerId(e) => e.to_string(),
            CredentialError::InvalidPassword(e) => e.to_string(),
            CredentialError::MalformedBody(e) => e.body_text(),
            CredentialError::DuplicateIdentity => self.to_string(),
            CredentialError::StoreUnavailable(_) => "Credential store is unavailable".to_string(),
            CredentialError::Internal(_) => "Internal server error".to_string(),
        };

        let app_err = AppError::new(self.kind(), message);
        match self {
            CredentialError::InvalidPassword(_) => {
                app_err.with_action("Please choose a password within the allowed length")
            }
            CredentialError::MalformedBody(_) => {
                app_err.with_action("Send a JSON object with customerId and password")
            }
            CredentialError::StoreUnavailable(_) => app_err.with_action("Please try again later"),
            _ => app_err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CredentialError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Credential store error");
            }
            CredentialError::Internal(msg) => {
                tracing::error!(message = %msg, "Credential internal error");
            }
            CredentialError::DuplicateIdentity => {
                tracing::info!("Registration rejected: duplicate customer id");
            }
            _ => {
                tracing::debug!(error = %self, "Credential request rejected");
            }
        }
    }
}

impl IntoResponse for CredentialError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            CredentialError::InvalidCustomerId(CustomerIdError::Empty).kind(),
            ErrorKind::UnprocessableEntity
        );
        assert_eq!(
            CredentialError::InvalidPassword(PasswordPolicyError::TooShort { min: 4, actual: 1 })
                .kind(),
            ErrorKind::UnprocessableEntity
        );
        assert_eq!(CredentialError::DuplicateIdentity.kind(), ErrorKind::Conflict);
        assert_eq!(
            CredentialError::StoreUnavailable(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(
            CredentialError::Internal("boom".to_string()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_response_status() {
        let response = CredentialError::DuplicateIdentity.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = CredentialError::StoreUnavailable(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = CredentialError::InvalidCustomerId(CustomerIdError::Empty).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_internal_details_not_exposed() {
        let app_err = CredentialError::Internal("argon2 exploded".to_string()).to_app_error();
        assert!(!app_err.message().contains("argon2"));

        let app_err = CredentialError::StoreUnavailable(sqlx::Error::PoolTimedOut).to_app_error();
        assert!(!app_err.message().contains("pool"));
    }
}
