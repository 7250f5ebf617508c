//! User domain models and parameters.
//!
//! Provides parameter types for account registration and profile updates along with
//! conversions from user entities to the DTOs exposed by the API. The password hash
//! never leaves this boundary.

use crate::model::user::{AuthorDto, UserDto};

/// Default role assigned at registration.
pub const ROLE_USER: &str = "user";
/// Role allowed to moderate content owned by other users.
pub const ROLE_MODERATOR: &str = "moderator";
/// Role allowed to manage tags and moderate content.
pub const ROLE_ADMIN: &str = "admin";

/// Parameters for creating a new user account.
///
/// The password arrives already hashed; plaintext passwords stop at the
/// authentication service.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Unique display name chosen at registration.
    pub username: String,
    /// Unique email address used for login.
    pub email: String,
    /// Bcrypt hash of the user's password.
    pub password_hash: String,
}

/// Parameters for updating a user's profile.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    /// New unique display name.
    pub username: Option<String>,
    /// New unique email address.
    pub email: Option<String>,
    /// New biography text.
    pub bio: Option<String>,
    /// New avatar image URL.
    pub avatar_url: Option<String>,
}

/// Whether a user may edit or delete content owned by someone else.
pub fn can_moderate(user: &entity::user::Model) -> bool {
    user.role == ROLE_MODERATOR || user.role == ROLE_ADMIN
}

/// Converts a user entity to the full profile DTO, dropping the password hash.
///
/// # Returns
/// - `UserDto` - The converted user profile
pub fn to_user_dto(user: entity::user::Model) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username,
        email: user.email,
        role: user.role,
        reputation: user.reputation,
        bio: user.bio,
        avatar_url: user.avatar_url,
        created_at: user.created_at,
    }
}

/// Converts a user entity to the reduced author block embedded in content payloads.
///
/// # Returns
/// - `AuthorDto` - The converted author summary
pub fn to_author_dto(user: entity::user::Model) -> AuthorDto {
    AuthorDto {
        id: user.id,
        username: user.username,
        reputation: user.reputation,
        avatar_url: user.avatar_url,
    }
}
