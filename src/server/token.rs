//! Stateless bearer-token issuance and verification.
//!
//! Authentication is carried by HS256 JSON Web Tokens. The `JwtCodec` is
//! built once from the configured secret and shared through `AppState`; the
//! auth service uses it to issue tokens and the auth guard uses it to verify
//! the `Authorization: Bearer` header. Password-reset tokens use the same
//! codec with a distinct purpose claim and a much shorter lifetime, so a
//! reset token can never be replayed as a login token.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Lifetime of a login token.
const AUTH_TOKEN_TTL_DAYS: i64 = 7;
/// Lifetime of a password-reset token.
const RESET_TOKEN_TTL_HOURS: i64 = 1;

/// Purpose claim value for login tokens.
pub const PURPOSE_AUTH: &str = "auth";
/// Purpose claim value for password-reset tokens.
pub const PURPOSE_PASSWORD_RESET: &str = "password_reset";

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// ID of the user the token was issued to.
    pub sub: i32,
    /// Role the user held at issuance. Authorization checks re-read the user
    /// row, so a stale role here only affects logging.
    pub role: String,
    /// What the token is good for, one of the PURPOSE_ constants.
    pub purpose: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

/// HS256 signer/verifier built from the configured secret.
#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtCodec {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a login token for one user.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token, valid for seven days
    /// - `Err(AppError)` - Signing failed
    pub fn issue_auth_token(&self, user_id: i32, role: &str) -> Result<String, AppError> {
        self.issue(user_id, role, PURPOSE_AUTH, Duration::days(AUTH_TOKEN_TTL_DAYS))
    }

    /// Issues a short-lived password-reset token for one user.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token, valid for one hour
    /// - `Err(AppError)` - Signing failed
    pub fn issue_reset_token(&self, user_id: i32, role: &str) -> Result<String, AppError> {
        self.issue(
            user_id,
            role,
            PURPOSE_PASSWORD_RESET,
            Duration::hours(RESET_TOKEN_TTL_HOURS),
        )
    }

    fn issue(
        &self,
        user_id: i32,
        role: &str,
        purpose: &str,
        ttl: Duration,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id,
            role: role.to_string(),
            purpose: purpose.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verifies a token's signature and expiry and checks its purpose.
    ///
    /// # Arguments
    /// - `token` - The raw token string from the request
    /// - `purpose` - Purpose the token must have been issued for
    ///
    /// # Returns
    /// - `Ok(Claims)` - Verified claims
    /// - `Err(AppError::AuthErr(InvalidToken))` - Bad signature, expired, or
    ///   issued for a different purpose
    pub fn verify(&self, token: &str, purpose: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AuthError::InvalidToken)?;

        if data.claims.purpose != purpose {
            return Err(AuthError::InvalidToken.into());
        }

        Ok(data.claims)
    }
}
