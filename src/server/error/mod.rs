//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::{
    model::api::{ErrorDto, FieldErrorDto},
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Authentication errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Token signing or decoding error from jsonwebtoken.
    ///
    /// Verification failures are mapped to `AuthError` before reaching this
    /// variant, so hitting it means token issuance itself failed. Results in
    /// 500 Internal Server Error.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or verification error from bcrypt.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// Response body serialization error from serde_json.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Field-level validation failure.
    ///
    /// Results in 400 Bad Request carrying one entry per failed field in the
    /// response `errors` array.
    ///
    /// # Fields
    /// - One `(field, message)` pair per failed validation rule
    #[error("Validation failed")]
    Validation(Vec<FieldErrorDto>),

    /// Request conflicts with existing state, such as a duplicate unique value.
    ///
    /// Results in 409 Conflict with the provided error message.
    ///
    /// # Fields
    /// - Message describing the conflicting state
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorDto {
            success: false,
            message,
            errors: None,
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `Validation` variants
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 500 Internal Server Error - For all other error types (DbErr, JwtErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    success: false,
                    message: "Validation failed".to_string(),
                    errors: Some(errors),
                }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message JSON body
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
