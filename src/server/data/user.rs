//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user account records.
//! It handles account creation, profile updates, credential lookups, and the
//! atomic reputation adjustments driven by voting.

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, ROLE_USER};
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Repository providing database operations for user accounts.
///
/// Generic over the connection so the same operations run on a pooled
/// connection or inside a transaction handle.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account with the default role and zero reputation.
    ///
    /// # Arguments
    /// - `params` - Username, email, and pre-hashed password
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on
    ///   username or email
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(ROLE_USER.to_string()),
            reputation: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user
    /// - `Ok(None)` - No user with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by username.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user
    /// - `Ok(None)` - No user with this username
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds a user by email address.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user
    /// - `Ok(None)` - No user with this email
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates a user's profile fields.
    ///
    /// Only fields provided in the params are touched; everything else keeps
    /// its stored value.
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `params` - Optional new username, email, bio, and avatar URL
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with this ID
    /// - `Err(DbErr)` - Database error, including unique violations
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(username) = params.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(bio) = params.bio {
            active_model.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(avatar_url) = params.avatar_url {
            active_model.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Replaces a user's password hash.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn update_password(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.password_hash = ActiveValue::Set(password_hash);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Adjusts a user's reputation by a signed delta in a single statement.
    ///
    /// The adjustment happens entirely in the database so concurrent votes
    /// never lose updates.
    ///
    /// # Returns
    /// - `Ok(())` - Reputation adjusted (no-op when the user is gone)
    /// - `Err(DbErr)` - Database error
    pub async fn adjust_reputation(&self, id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Reputation,
                Expr::col(entity::user::Column::Reputation).add(delta),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a user account.
    ///
    /// Owned questions, answers, votes, and notifications go with it through
    /// the foreign key cascade rules.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows deleted (0 when the user was gone)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
