use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        tag::{CreateTagDto, PaginatedTagsDto, TagDto, UpdateTagDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::tag::{to_tag_dto, CreateTagParams, ListTagsParams, TagSort, UpdateTagParams},
        service::tag::TagService,
        state::AppState,
    },
};

use super::PaginationParams;

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Default number of tags returned by the popular endpoint.
const DEFAULT_POPULAR_LIMIT: u64 = 20;

#[derive(Deserialize)]
pub struct ListTagsQuery {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub search: Option<String>,
    pub sort: Option<String>,
}

#[derive(Deserialize)]
pub struct PopularQuery {
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// List tags.
///
/// Paginated, sorted by usage by default (`sort` also accepts `name` and
/// `newest`), with an optional case-insensitive `search` over name and
/// description. Responses are served from the response cache keyed by path
/// and query string.
///
/// # Returns
/// - `200 OK` - Paginated tags
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 50)"),
        ("search" = Option<String>, Query, description = "Search over name and description"),
        ("sort" = Option<String>, Query, description = "Sort order: usage (default), name, newest")
    ),
    responses(
        (status = 200, description = "Paginated tags", body = PaginatedTagsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tags(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListTagsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let cache_key = uri.to_string();
    if let Some(body) = state.cache.get(&cache_key).await {
        return Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        ));
    }

    let (page, per_page) = query.pagination.clamp();
    let service = TagService::new(&state.db);
    let tags = service
        .list_tags(ListTagsParams {
            page,
            per_page,
            search: query.search,
            sort: TagSort::parse(query.sort.as_deref()),
        })
        .await?;

    let body = serde_json::to_string(&ApiResponse::data(tags.into_dto()))?;
    state.cache.put(cache_key, body.clone()).await;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}

/// List the most used tags.
///
/// Ordered by usage count descending; `limit` defaults to 20 and is capped
/// at 50. Responses are served from the response cache.
///
/// # Returns
/// - `200 OK` - Most used tags
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags/popular",
    tag = TAG_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Number of tags (default: 20, max: 50)")
    ),
    responses(
        (status = 200, description = "Most used tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn popular_tags(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PopularQuery>,
) -> Result<impl IntoResponse, AppError> {
    let cache_key = uri.to_string();
    if let Some(body) = state.cache.get(&cache_key).await {
        return Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        ));
    }

    let limit = query
        .limit
        .unwrap_or(DEFAULT_POPULAR_LIMIT)
        .clamp(1, super::MAX_PER_PAGE);
    let service = TagService::new(&state.db);
    let tags = service.popular_tags(limit).await?;

    let body = serde_json::to_string(&ApiResponse::data(
        tags.into_iter().map(to_tag_dto).collect::<Vec<_>>(),
    ))?;
    state.cache.put(cache_key, body.clone()).await;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}

/// Search tags for autocomplete.
///
/// Substring match on name and description, top ten by usage.
///
/// # Returns
/// - `200 OK` - Matching tags
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags/search",
    tag = TAG_TAG,
    params(
        ("q" = String, Query, description = "Search text")
    ),
    responses(
        (status = 200, description = "Matching tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_tags(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);
    let tags = service.search_tags(&query.q).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(
            tags.into_iter().map(to_tag_dto).collect::<Vec<_>>(),
        )),
    ))
}

/// Get the tags of one question.
///
/// # Returns
/// - `200 OK` - Tags of the question, name-ordered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags/question/{question_id}",
    tag = TAG_TAG,
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Tags of the question", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags_for_question(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);
    let tags = service.tags_for_question(question_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(
            tags.into_iter().map(to_tag_dto).collect::<Vec<_>>(),
        )),
    ))
}

/// Get one tag by ID or name.
///
/// Numeric input is treated as an ID, anything else as an exact name.
///
/// # Returns
/// - `200 OK` - The tag
/// - `404 Not Found` - No matching tag
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags/{id_or_name}",
    tag = TAG_TAG,
    params(
        ("id_or_name" = String, Path, description = "Numeric tag ID or exact tag name")
    ),
    responses(
        (status = 200, description = "Tag detail", body = TagDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id_or_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);
    let tag = service.get_tag(&id_or_name).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(to_tag_dto(tag)))))
}

/// Create a tag.
///
/// The name is normalized to lowercase and must be unique.
///
/// # Access Control
/// - `Admin` - Only admins can create tags directly
///
/// # Returns
/// - `201 Created` - The new tag
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `409 Conflict` - A tag with this name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Tag name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    let service = TagService::new(&state.db);
    let tag = service
        .create_tag(CreateTagParams {
            name: payload.name,
            description: payload.description,
            color: payload.color,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(to_tag_dto(tag)))))
}

/// Update a tag's description or color.
///
/// Names are immutable; questions reference tags by id.
///
/// # Access Control
/// - `Admin` - Only admins can update tags
///
/// # Returns
/// - `200 OK` - Updated tag
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No tag with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    request_body = UpdateTagDto,
    responses(
        (status = 200, description = "Tag updated", body = TagDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    let service = TagService::new(&state.db);
    let tag = service
        .update_tag(
            id,
            UpdateTagParams {
                description: payload.description,
                color: payload.color,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(to_tag_dto(tag)))))
}

/// Delete an unused tag.
///
/// # Access Control
/// - `Admin` - Only admins can delete tags
///
/// # Returns
/// - `200 OK` - Tag deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No tag with this ID
/// - `409 Conflict` - Tag is still linked to questions
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Tag deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 409, description = "Tag still in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    let service = TagService::new(&state.db);
    service.delete_tag(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Tag deleted successfully")),
    ))
}
