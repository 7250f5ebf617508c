//! Notification data repository for database operations.
//!
//! This module provides the `NotificationRepository` for the per-user
//! notification feed. Every read and mutation except `create` is scoped to
//! the recipient, so a caller can never touch notifications belonging to
//! another user through this repository.

use crate::server::model::notification::CreateNotificationParams;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for notifications.
///
/// Generic over the connection so the same operations run on a pooled
/// connection or inside a transaction handle.
pub struct NotificationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `NotificationRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an unread notification for one recipient.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created notification
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            type_: ActiveValue::Set(params.kind.to_string()),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            reference_type: ActiveValue::Set(params.reference_type),
            reference_id: ActiveValue::Set(params.reference_id),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a notification by ID if it belongs to the given recipient.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The notification
    /// - `Ok(None)` - No such notification, or it belongs to someone else
    /// - `Err(DbErr)` - Database error
    pub async fn find_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets a page of one recipient's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Recipient whose feed is listed
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of notifications per page
    /// - `unread_only` - When true, read notifications are skipped
    ///
    /// # Returns
    /// - `Ok((notifications, totals))` - Page of notifications and the total
    ///   item and page counts for the query
    /// - `Err(DbErr)` - Database error
    pub async fn list_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
        unread_only: bool,
    ) -> Result<(Vec<entity::notification::Model>, ItemsAndPagesNumber), DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));

        if unread_only {
            query = query.filter(entity::notification::Column::IsRead.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .paginate(self.db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let notifications = paginator.fetch_page(page).await?;

        Ok((notifications, totals))
    }

    /// Counts one recipient's unread notifications.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of unread notifications
    /// - `Err(DbErr)` - Database error
    pub async fn unread_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one notification read if it belongs to the given recipient.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The notification, now read
    /// - `Ok(None)` - No such notification, or it belongs to someone else
    /// - `Err(DbErr)` - Database error
    pub async fn mark_read(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        let Some(notification) = self.find_for_user(id, user_id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::notification::ActiveModel = notification.into();
        active_model.is_read = ActiveValue::Set(true);

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Marks every unread notification of one recipient read.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of notifications flipped to read
    /// - `Err(DbErr)` - Database error
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes one notification if it belongs to the given recipient.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification deleted
    /// - `Ok(false)` - No such notification, or it belongs to someone else
    /// - `Err(DbErr)` - Database error
    pub async fn delete_for_user(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every notification of one recipient.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of notifications deleted
    /// - `Err(DbErr)` - Database error
    pub async fn delete_all_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
