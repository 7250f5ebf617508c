//! Bearer-token authentication guard.
//!
//! Controllers construct an `AuthGuard` per request and call `require` with
//! the permissions the endpoint needs. The guard pulls the token out of the
//! `Authorization` header, verifies it, and loads the user row so handlers
//! always work with the current role and reputation rather than whatever was
//! baked into the token at issuance.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{ROLE_ADMIN, ROLE_MODERATOR},
    token::{JwtCodec, PURPOSE_AUTH},
};

/// Role requirements an endpoint can demand beyond plain authentication.
pub enum Permission {
    /// Role must be `moderator` or `admin`.
    Moderator,
    /// Role must be `admin`.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtCodec,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtCodec) -> Self {
        Self { db, jwt }
    }

    /// Authenticates the request and checks the required permissions.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying `Authorization: Bearer <token>`
    /// - `permissions` - Role requirements, empty for any authenticated user
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user row
    /// - `Err(AppError::AuthErr)` - Missing/invalid token (401), deleted
    ///   account (401), or insufficient role (403)
    pub async fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
        let claims = self.jwt.verify(token, PURPOSE_AUTH)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase.into());
        };

        for permission in permissions {
            let allowed = match permission {
                Permission::Moderator => {
                    user.role == ROLE_MODERATOR || user.role == ROLE_ADMIN
                }
                Permission::Admin => user.role == ROLE_ADMIN,
            };

            if !allowed {
                tracing::warn!(
                    user_id = user.id,
                    role = %user.role,
                    "insufficient role for protected endpoint"
                );
                return Err(AuthError::InsufficientPermissions.into());
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
