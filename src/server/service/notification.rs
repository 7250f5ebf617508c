//! Notification service for business logic.
//!
//! Thin orchestration over the notification repository. Everything here is
//! scoped to the authenticated recipient; a notification belonging to
//! another user is indistinguishable from one that does not exist.

use crate::server::{
    data::notification::NotificationRepository,
    db::Db,
    error::AppError,
    model::notification::{ListNotificationsParams, PaginatedNotifications},
};

/// Service providing business logic for notifications.
pub struct NotificationService<'a> {
    pub db: &'a Db,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database handle
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Gets a page of the caller's notifications, newest first.
    ///
    /// # Returns
    /// - `Ok(PaginatedNotifications)` - Notifications with pagination metadata
    /// - `Err(AppError)` - Database error
    pub async fn list_notifications(
        &self,
        params: ListNotificationsParams,
    ) -> Result<PaginatedNotifications, AppError> {
        let (notifications, totals) = NotificationRepository::new(self.db.connection())
            .list_for_user(
                params.user_id,
                params.page - 1,
                params.per_page,
                params.unread_only,
            )
            .await?;

        Ok(PaginatedNotifications {
            notifications,
            total: totals.number_of_items,
            page: params.page,
            per_page: params.per_page,
            total_pages: totals.number_of_pages,
        })
    }

    /// Counts the caller's unread notifications.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of unread notifications
    /// - `Err(AppError)` - Database error
    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db.connection())
            .unread_count(user_id)
            .await?)
    }

    /// Gets one of the caller's notifications.
    ///
    /// # Returns
    /// - `Ok(Model)` - The notification
    /// - `Err(AppError::NotFound)` - No such notification for this caller
    /// - `Err(AppError)` - Database error
    pub async fn get_notification(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<entity::notification::Model, AppError> {
        NotificationRepository::new(self.db.connection())
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }

    /// Marks one of the caller's notifications read.
    ///
    /// # Returns
    /// - `Ok(Model)` - The notification, now read
    /// - `Err(AppError::NotFound)` - No such notification for this caller
    /// - `Err(AppError)` - Database error
    pub async fn mark_read(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<entity::notification::Model, AppError> {
        NotificationRepository::new(self.db.connection())
            .mark_read(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }

    /// Marks all of the caller's notifications read.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications flipped to read
    /// - `Err(AppError)` - Database error
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db.connection())
            .mark_all_read(user_id)
            .await?)
    }

    /// Deletes one of the caller's notifications.
    ///
    /// # Returns
    /// - `Ok(())` - Notification deleted
    /// - `Err(AppError::NotFound)` - No such notification for this caller
    /// - `Err(AppError)` - Database error
    pub async fn delete_notification(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let deleted = NotificationRepository::new(self.db.connection())
            .delete_for_user(id, user_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }

    /// Deletes all of the caller's notifications.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications deleted
    /// - `Err(AppError)` - Database error
    pub async fn delete_all(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db.connection())
            .delete_all_for_user(user_id)
            .await?)
    }
}
