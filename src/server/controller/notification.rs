use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        notification::{
            AffectedCountDto, NotificationDto, PaginatedNotificationsDto, UnreadCountDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::notification::{to_notification_dto, ListNotificationsParams},
        service::notification::NotificationService,
        state::AppState,
    },
};

use super::PaginationParams;

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

#[derive(Deserialize)]
pub struct ListNotificationsQuery {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    #[serde(default)]
    pub unread_only: bool,
}

/// List the caller's notifications, newest first.
///
/// # Access Control
/// - Any authenticated user; always scoped to the caller
///
/// # Returns
/// - `200 OK` - Paginated notifications
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 50)"),
        ("unread_only" = Option<bool>, Query, description = "Only unread notifications")
    ),
    responses(
        (status = 200, description = "Paginated notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let (page, per_page) = query.pagination.clamp();
    let service = NotificationService::new(&state.db);
    let notifications = service
        .list_notifications(ListNotificationsParams {
            user_id: user.id,
            page,
            per_page,
            unread_only: query.unread_only,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(notifications.into_dto())),
    ))
}

/// Count the caller's unread notifications.
///
/// # Returns
/// - `200 OK` - Unread count
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread count", body = UnreadCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unread_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = NotificationService::new(&state.db);
    let count = service.unread_count(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(UnreadCountDto { count })),
    ))
}

/// Get one of the caller's notifications.
///
/// # Returns
/// - `200 OK` - The notification
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such notification for this caller
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification detail", body = NotificationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = NotificationService::new(&state.db);
    let notification = service.get_notification(id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(to_notification_dto(notification))),
    ))
}

/// Mark one notification read.
///
/// # Returns
/// - `200 OK` - The notification, now read
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such notification for this caller
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = NotificationService::new(&state.db);
    let notification = service.mark_read(id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(to_notification_dto(notification))),
    ))
}

/// Mark all of the caller's notifications read.
///
/// # Returns
/// - `200 OK` - Number of notifications flipped to read
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "All notifications marked read", body = AffectedCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = NotificationService::new(&state.db);
    let count = service.mark_all_read(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(AffectedCountDto { count })),
    ))
}

/// Delete one of the caller's notifications.
///
/// # Returns
/// - `200 OK` - Notification deleted
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such notification for this caller
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = NotificationService::new(&state.db);
    service.delete_notification(id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Notification deleted successfully")),
    ))
}

/// Delete all of the caller's notifications.
///
/// # Returns
/// - `200 OK` - Number of notifications deleted
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "All notifications deleted", body = AffectedCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_all_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = NotificationService::new(&state.db);
    let count = service.delete_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(AffectedCountDto { count })),
    ))
}
