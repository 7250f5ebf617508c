//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user accounts with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use std::sync::OnceLock;

/// Default plaintext password for factory-created users.
///
/// Satisfies the application's password policy so login and password-change
/// tests can authenticate against factory accounts.
pub const DEFAULT_PASSWORD: &str = "Password1";

/// Returns the bcrypt hash of [`DEFAULT_PASSWORD`], computed once per process.
///
/// Hashing is slow even at the minimum cost, so the default hash is cached
/// and shared across all factory-created users.
fn default_password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| {
        bcrypt::hash(DEFAULT_PASSWORD, bcrypt::DEFAULT_COST.min(4)).expect("bcrypt hash failed")
    })
}

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("alice")
///     .role("admin")
///     .reputation(100)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password: Option<String>,
    role: String,
    reputation: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - role: `"user"`
    /// - reputation: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password: None,
            role: "user".to_string(),
            reputation: 0,
        }
    }

    /// Sets the username for the user.
    ///
    /// # Arguments
    /// - `username` - Unique display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the email for the user.
    ///
    /// # Arguments
    /// - `email` - Unique email address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets a custom plaintext password for the user.
    ///
    /// The password is bcrypt-hashed at minimum cost during `build()`.
    ///
    /// # Arguments
    /// - `password` - Plaintext password to hash and store
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the role for the user.
    ///
    /// # Arguments
    /// - `role` - One of `"user"`, `"moderator"`, or `"admin"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the starting reputation for the user.
    ///
    /// # Arguments
    /// - `reputation` - Initial reputation score
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn reputation(mut self, reputation: i32) -> Self {
        self.reputation = reputation;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = match self.password {
            Some(ref password) => bcrypt::hash(password, bcrypt::DEFAULT_COST.min(4))
                .map_err(|err| DbErr::Custom(err.to_string()))?,
            None => default_password_hash().to_string(),
        };

        let now = Utc::now();
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(self.role),
            reputation: ActiveValue::Set(self.reputation),
            bio: ActiveValue::Set(None),
            avatar_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the moderator role.
///
/// Shorthand for `UserFactory::new(db).role("moderator").build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created moderator entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_moderator(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("moderator").build().await
}

/// Creates a user with the admin role.
///
/// Shorthand for `UserFactory::new(db).role("admin").build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created admin entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("admin").build().await
}
