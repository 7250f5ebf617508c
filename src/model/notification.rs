use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub message: String,
    pub reference_type: Option<String>,
    pub reference_id: Option<i32>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedNotificationsDto {
    pub notifications: Vec<NotificationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UnreadCountDto {
    pub count: u64,
}

/// Row count for bulk mark-read and bulk delete operations.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AffectedCountDto {
    pub count: u64,
}
