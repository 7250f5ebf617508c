//! Authentication service for business logic.
//!
//! Owns the account lifecycle: registration with bcrypt hashing and
//! uniqueness checks, credential verification at login, profile and
//! password maintenance, the password-reset token flow, and account
//! deletion. Tokens are stateless JWTs issued through the shared codec,
//! so logout is an acknowledgment only and lives in the controller.

use crate::server::{
    data::user::UserRepository,
    db::Db,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, UpdateProfileParams},
    token::{JwtCodec, PURPOSE_PASSWORD_RESET},
    util::validate::Validator,
};

/// Outcome of a successful registration or login.
pub struct AuthOutcome {
    pub token: String,
    pub user: entity::user::Model,
}

/// Service providing business logic for authentication and accounts.
pub struct AuthService<'a> {
    pub db: &'a Db,
    jwt: &'a JwtCodec,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database handle
    /// - `jwt` - Token codec shared through the application state
    /// - `bcrypt_cost` - Configured bcrypt work factor
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a Db, jwt: &'a JwtCodec, bcrypt_cost: u32) -> Self {
        Self {
            db,
            jwt,
            bcrypt_cost,
        }
    }

    /// Registers a new account and issues its first login token.
    ///
    /// # Returns
    /// - `Ok(AuthOutcome)` - Token and the created user
    /// - `Err(AppError::Validation)` - Username, email, or password invalid
    /// - `Err(AppError::Conflict)` - Username or email already taken
    /// - `Err(AppError)` - Database or hashing error
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<AuthOutcome, AppError> {
        let username = username.trim().to_string();
        let email = email.trim().to_lowercase();

        let mut validator = Validator::new();
        validator.username(&username);
        validator.email(&email);
        validator.password("password", &password);
        validator.finish()?;

        let repo = UserRepository::new(self.db.connection());
        if repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&password, self.bcrypt_cost)?;
        let user = repo
            .create(CreateUserParams {
                username,
                email,
                password_hash,
            })
            .await
            .map_err(|err| match err.sql_err() {
                // Lost the probe-then-insert race against a concurrent signup.
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("Username or email is already taken".to_string())
                }
                _ => err.into(),
            })?;

        tracing::info!(user_id = user.id, "new account registered");

        let token = self.jwt.issue_auth_token(user.id, &user.role)?;
        Ok(AuthOutcome { token, user })
    }

    /// Verifies credentials and issues a login token.
    ///
    /// # Returns
    /// - `Ok(AuthOutcome)` - Token and the authenticated user
    /// - `Err(AppError::AuthErr)` - Unknown email or wrong password (401)
    /// - `Err(AppError)` - Database or hashing error
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db.connection())
            .find_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            tracing::warn!(user_id = user.id, "failed login attempt");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.issue_auth_token(user.id, &user.role)?;
        Ok(AuthOutcome { token, user })
    }

    /// Updates the caller's profile fields with uniqueness checks.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(AppError::Validation)` - Provided fields invalid
    /// - `Err(AppError::Conflict)` - New username or email taken by another
    ///   account
    /// - `Err(AppError)` - Database error
    pub async fn update_profile(
        &self,
        user: &entity::user::Model,
        mut params: UpdateProfileParams,
    ) -> Result<entity::user::Model, AppError> {
        params.username = params.username.map(|u| u.trim().to_string());
        params.email = params.email.map(|e| e.trim().to_lowercase());

        let mut validator = Validator::new();
        if let Some(ref username) = params.username {
            validator.username(username);
        }
        if let Some(ref email) = params.email {
            validator.email(email);
        }
        if let Some(ref bio) = params.bio {
            validator.bio(bio);
        }
        if let Some(ref avatar_url) = params.avatar_url {
            validator.avatar_url(avatar_url);
        }
        validator.finish()?;

        let repo = UserRepository::new(self.db.connection());

        if let Some(ref username) = params.username {
            if let Some(existing) = repo.find_by_username(username).await? {
                if existing.id != user.id {
                    return Err(AppError::Conflict("Username is already taken".to_string()));
                }
            }
        }
        if let Some(ref email) = params.email {
            if let Some(existing) = repo.find_by_email(email).await? {
                if existing.id != user.id {
                    return Err(AppError::Conflict(
                        "An account with this email already exists".to_string(),
                    ));
                }
            }
        }

        Ok(repo.update_profile(user.id, params).await?)
    }

    /// Replaces the caller's password after verifying the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::Validation)` - New password too weak
    /// - `Err(AppError::BadRequest)` - Current password wrong
    /// - `Err(AppError)` - Database or hashing error
    pub async fn change_password(
        &self,
        user: &entity::user::Model,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let mut validator = Validator::new();
        validator.password("new_password", new_password);
        validator.finish()?;

        if !bcrypt::verify(current_password, &user.password_hash)? {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(new_password, self.bcrypt_cost)?;
        UserRepository::new(self.db.connection())
            .update_password(user.id, password_hash)
            .await?;

        Ok(())
    }

    /// Starts a password reset for an email address.
    ///
    /// Always succeeds from the caller's point of view so the endpoint does
    /// not reveal which emails have accounts. When the account exists a
    /// short-lived reset token is issued and logged; a mail integration
    /// would pick it up from here.
    ///
    /// # Returns
    /// - `Ok(())` - Request acknowledged
    /// - `Err(AppError)` - Database or signing error
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let email = email.trim().to_lowercase();

        if let Some(user) = UserRepository::new(self.db.connection())
            .find_by_email(&email)
            .await?
        {
            let token = self.jwt.issue_reset_token(user.id, &user.role)?;
            tracing::info!(user_id = user.id, reset_token = %token, "password reset requested");
        }

        Ok(())
    }

    /// Consumes a reset token and sets a new password.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::Validation)` - New password too weak
    /// - `Err(AppError::AuthErr)` - Token invalid, expired, or not a reset
    ///   token (401)
    /// - `Err(AppError)` - Database or hashing error
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let mut validator = Validator::new();
        validator.password("new_password", new_password);
        validator.finish()?;

        let claims = self.jwt.verify(token, PURPOSE_PASSWORD_RESET)?;

        let repo = UserRepository::new(self.db.connection());
        let Some(user) = repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase.into());
        };

        let password_hash = bcrypt::hash(new_password, self.bcrypt_cost)?;
        repo.update_password(user.id, password_hash).await?;

        tracing::info!(user_id = user.id, "password reset completed");

        Ok(())
    }

    /// Deletes the caller's account after verifying the password.
    ///
    /// Owned questions, answers, votes, and notifications go with it
    /// through the foreign-key cascade rules.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::BadRequest)` - Password wrong
    /// - `Err(AppError)` - Database or hashing error
    pub async fn delete_account(
        &self,
        user: &entity::user::Model,
        password: &str,
    ) -> Result<(), AppError> {
        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AppError::BadRequest("Password is incorrect".to_string()));
        }

        UserRepository::new(self.db.connection())
            .delete(user.id)
            .await?;

        tracing::info!(user_id = user.id, "account deleted");

        Ok(())
    }
}
