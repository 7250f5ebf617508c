use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{
            AuthResponseDto, ChangePasswordDto, DeleteAccountDto, LoginDto, PasswordResetDto,
            PasswordResetRequestDto, RegisterDto, UpdateProfileDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{to_user_dto, UpdateProfileParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with the given username, email, and password, and returns
/// a login token alongside the new profile. Username and email must be
/// unique; the password must satisfy the strength rules.
///
/// # Arguments
/// - `state` - Application state containing the database and JWT codec
/// - `payload` - Registration data (username, email, password)
///
/// # Returns
/// - `201 Created` - Token and profile for the new account
/// - `400 Bad Request` - Validation failed
/// - `409 Conflict` - Username or email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, state.bcrypt_cost);
    let outcome = service
        .register(payload.username, payload.email, payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(AuthResponseDto {
            token: outcome.token,
            user: to_user_dto(outcome.user),
        })),
    ))
}

/// Log in with email and password.
///
/// # Arguments
/// - `state` - Application state containing the database and JWT codec
/// - `payload` - Login credentials (email, password)
///
/// # Returns
/// - `200 OK` - Token and profile
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, state.bcrypt_cost);
    let outcome = service.login(&payload.email, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(AuthResponseDto {
            token: outcome.token,
            user: to_user_dto(outcome.user),
        })),
    ))
}

/// Acknowledge a logout.
///
/// Tokens are stateless, so there is nothing to revoke server-side; clients
/// drop the token. The endpoint still requires authentication so a dead
/// token is reported as 401 rather than silently accepted.
///
/// # Returns
/// - `200 OK` - Acknowledgment
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Logged out successfully")),
    ))
}

/// Get the authenticated user's profile.
///
/// # Returns
/// - `200 OK` - Current profile, password hash omitted
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(to_user_dto(user)))))
}

/// Update the authenticated user's profile.
///
/// Username, email, bio, and avatar URL can be changed; only provided
/// fields are touched. Username and email changes re-check uniqueness.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Missing or invalid token
/// - `409 Conflict` - Username or email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AuthService::new(&state.db, &state.jwt, state.bcrypt_cost);
    let updated = service
        .update_profile(
            &user,
            UpdateProfileParams {
                username: payload.username,
                email: payload.email,
                bio: payload.bio,
                avatar_url: payload.avatar_url,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(to_user_dto(updated)))))
}

/// Change the authenticated user's password.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Wrong current password or weak new password
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/auth/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Wrong current password or weak new password", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AuthService::new(&state.db, &state.jwt, state.bcrypt_cost);
    service
        .change_password(&user, &payload.current_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Password changed successfully")),
    ))
}

/// Request a password reset token.
///
/// Always answers 200 so the endpoint cannot be used to probe which emails
/// have accounts. When the email exists, a short-lived reset token is
/// issued and logged server-side.
///
/// # Returns
/// - `200 OK` - Acknowledgment regardless of whether the email exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/password-reset/request",
    tag = AUTH_TAG,
    request_body = PasswordResetRequestDto,
    responses(
        (status = 200, description = "Reset requested"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, state.bcrypt_cost);
    service.request_password_reset(&payload.email).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "If that email is registered, a reset token has been issued",
        )),
    ))
}

/// Reset a password with a reset token.
///
/// # Returns
/// - `200 OK` - Password reset
/// - `400 Bad Request` - Weak new password
/// - `401 Unauthorized` - Invalid or expired reset token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/password-reset",
    tag = AUTH_TAG,
    request_body = PasswordResetDto,
    responses(
        (status = 200, description = "Password reset"),
        (status = 400, description = "Weak new password", body = ErrorDto),
        (status = 401, description = "Invalid or expired reset token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, state.bcrypt_cost);
    service
        .reset_password(&payload.token, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Password reset successfully")),
    ))
}

/// Delete the authenticated user's account.
///
/// Requires the current password. Owned questions, answers, votes, and
/// notifications fall to the foreign-key cascade.
///
/// # Returns
/// - `200 OK` - Account deleted
/// - `400 Bad Request` - Wrong password
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/auth/account",
    tag = AUTH_TAG,
    request_body = DeleteAccountDto,
    responses(
        (status = 200, description = "Account deleted"),
        (status = 400, description = "Wrong password", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<DeleteAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AuthService::new(&state.db, &state.jwt, state.bcrypt_cost);
    service.delete_account(&user, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Account deleted successfully")),
    ))
}
