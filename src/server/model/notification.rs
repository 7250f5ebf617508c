//! Notification domain models and parameters.

use crate::model::notification::{NotificationDto, PaginatedNotificationsDto};

/// Someone answered the recipient's question.
pub const TYPE_ANSWER: &str = "answer";
/// Someone upvoted the recipient's content.
pub const TYPE_VOTE: &str = "vote";
/// The recipient's answer was accepted.
pub const TYPE_ACCEPT: &str = "accept";
/// Broadcast from the platform itself.
pub const TYPE_SYSTEM: &str = "system";

/// Longest slice of a title or body quoted inside a notification message.
const EXCERPT_MAX: usize = 50;

/// Shortens a title or body for embedding in a notification message.
pub fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= EXCERPT_MAX {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(EXCERPT_MAX).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Parameters for creating a notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    /// ID of the recipient user.
    pub user_id: i32,
    /// Notification kind, one of the TYPE_ constants.
    pub kind: &'static str,
    /// Short headline shown in the notification list.
    pub title: String,
    /// Full notification text.
    pub message: String,
    /// Kind of entity the notification points at.
    pub reference_type: Option<String>,
    /// ID of the entity the notification points at.
    pub reference_id: Option<i32>,
}

/// Parameters for paginated notification list queries.
#[derive(Debug, Clone)]
pub struct ListNotificationsParams {
    /// ID of the recipient whose notifications are listed.
    pub user_id: i32,
    /// Page number (1-indexed).
    pub page: u64,
    /// Number of notifications per page.
    pub per_page: u64,
    /// When true, only unread notifications are returned.
    pub unread_only: bool,
}

/// Converts a notification entity to its DTO.
pub fn to_notification_dto(notification: entity::notification::Model) -> NotificationDto {
    NotificationDto {
        id: notification.id,
        user_id: notification.user_id,
        type_: notification.type_,
        title: notification.title,
        message: notification.message,
        reference_type: notification.reference_type,
        reference_id: notification.reference_id,
        is_read: notification.is_read,
        created_at: notification.created_at,
    }
}

/// Paginated collection of notifications with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedNotifications {
    /// Notifications for this page.
    pub notifications: Vec<entity::notification::Model>,
    /// Total number of notifications matching the query.
    pub total: u64,
    /// Current page number (1-indexed).
    pub page: u64,
    /// Number of notifications per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedNotifications {
    /// Converts the paginated notifications to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self
                .notifications
                .into_iter()
                .map(to_notification_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
