use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied on a protected endpoint.
    ///
    /// The `Authorization` header was missing entirely or did not use the
    /// `Bearer <token>` scheme. Results in a 401 Unauthorized response.
    #[error("Missing authentication token")]
    MissingToken,

    /// The supplied token failed signature verification or has expired.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid or expired authentication token")]
    InvalidToken,

    /// Login attempt with a wrong email or password.
    ///
    /// The same message covers both cases so the endpoint does not reveal
    /// which emails have accounts. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The token verified but its subject no longer exists.
    ///
    /// Happens when an account is deleted while a previously issued token is
    /// still in circulation. Results in a 401 Unauthorized response.
    #[error("Authenticated user no longer exists")]
    UserNotInDatabase,

    /// The authenticated user lacks the role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User lacks the required role for this action")]
    InsufficientPermissions,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages:
/// - `MissingToken` → 401 Unauthorized with "Authentication required"
/// - `InvalidToken` → 401 Unauthorized with "Invalid or expired token"
/// - `UserNotInDatabase` → 401 Unauthorized with "User not found"
/// - `InsufficientPermissions` → 403 Forbidden
///
/// Client-facing messages stay generic to avoid leaking which check failed
/// beyond what the caller needs to correct the request.
///
/// # Returns
/// - 401 Unauthorized - For missing, invalid, or orphaned tokens
/// - 403 Forbidden - For insufficient role permissions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::UserNotInDatabase => (StatusCode::UNAUTHORIZED, "User not found"),
            Self::InsufficientPermissions => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                success: false,
                message: message.to_string(),
                errors: None,
            }),
        )
            .into_response()
    }
}
