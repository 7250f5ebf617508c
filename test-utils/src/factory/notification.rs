//! Notification factory for creating test notification entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    type_: String,
    title: String,
    message: String,
    reference_type: Option<String>,
    reference_id: Option<i32>,
    is_read: bool,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - type: `"answer"`
    /// - title: `"Test Notification {id}"`
    /// - message: `"Something happened {id}"`
    /// - reference_type / reference_id: `None`
    /// - is_read: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the recipient user
    ///
    /// # Returns
    /// - `NotificationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            type_: "answer".to_string(),
            title: format!("Test Notification {}", id),
            message: format!("Something happened {}", id),
            reference_type: None,
            reference_id: None,
            is_read: false,
        }
    }

    /// Sets the notification type.
    ///
    /// # Arguments
    /// - `type_` - One of `"answer"`, `"vote"`, or `"accept"`
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = type_.into();
        self
    }

    /// Sets the notification title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the notification message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the referenced content for the notification.
    pub fn reference(mut self, reference_type: impl Into<String>, reference_id: i32) -> Self {
        self.reference_type = Some(reference_type.into());
        self.reference_id = Some(reference_id);
        self
    }

    /// Sets the read flag for the notification.
    pub fn is_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Builds and inserts the notification entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            type_: ActiveValue::Set(self.type_),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            reference_type: ActiveValue::Set(self.reference_type),
            reference_id: ActiveValue::Set(self.reference_id),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notification with default values.
///
/// Shorthand for `NotificationFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the recipient user
///
/// # Returns
/// - `Ok(entity::notification::Model)` - Created notification entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
