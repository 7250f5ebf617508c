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
        question::{CreateQuestionDto, PaginatedQuestionsDto, QuestionDto, UpdateQuestionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::question::{
            CreateQuestionParams, ListQuestionsParams, QuestionSort, UpdateQuestionParams,
        },
        service::{answer::AnswerService, question::QuestionService},
        state::AppState,
    },
};

use super::PaginationParams;

/// Tag for grouping question endpoints in OpenAPI documentation
pub static QUESTION_TAG: &str = "question";

#[derive(Deserialize)]
pub struct ListQuestionsQuery {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub sort: Option<String>,
    pub search: Option<String>,
    pub tag: Option<String>,
}

/// List questions.
///
/// Returns a paginated page of questions with authors and tags. Supports
/// sorting (`newest`, `votes`, `answers`, `views`), a case-insensitive
/// `search` over title and description, and a `tag` filter. Responses are
/// served from the response cache keyed by path and query string.
///
/// # Arguments
/// - `state` - Application state containing the database and cache
/// - `uri` - Original request URI, used as the cache key
/// - `query` - Pagination, sort, search, and tag filters
///
/// # Returns
/// - `200 OK` - Paginated questions
/// - `404 Not Found` - `tag` filter names an unknown tag
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/questions",
    tag = QUESTION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 50)"),
        ("sort" = Option<String>, Query, description = "Sort order: newest, votes, answers, views"),
        ("search" = Option<String>, Query, description = "Search over title and description"),
        ("tag" = Option<String>, Query, description = "Restrict to questions carrying this tag")
    ),
    responses(
        (status = 200, description = "Paginated questions", body = PaginatedQuestionsDto),
        (status = 404, description = "Unknown tag", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_questions(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListQuestionsQuery>,
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
    let service = QuestionService::new(&state.db);
    let questions = service
        .list_questions(ListQuestionsParams {
            page,
            per_page,
            search: query.search,
            tag: query.tag,
            user_id: None,
            sort: QuestionSort::parse(query.sort.as_deref()),
        })
        .await?;

    let body = serde_json::to_string(&ApiResponse::data(questions.into_dto()))?;
    state.cache.put(cache_key, body.clone()).await;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}

/// Get a question by ID.
///
/// Returns the full question with author, tags, and answers. Each fetch
/// counts as a view.
///
/// # Returns
/// - `200 OK` - Question detail
/// - `404 Not Found` - No question with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/questions/id/{id}",
    tag = QUESTION_TAG,
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question detail", body = QuestionDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_question_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = QuestionService::new(&state.db);
    let detail = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(detail.into_dto()))))
}

/// Get a question by slug.
///
/// Same payload as the ID lookup, addressed by the URL slug. Each fetch
/// counts as a view.
///
/// # Returns
/// - `200 OK` - Question detail
/// - `404 Not Found` - No question with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/questions/slug/{slug}",
    tag = QUESTION_TAG,
    params(
        ("slug" = String, Path, description = "Question slug")
    ),
    responses(
        (status = 200, description = "Question detail", body = QuestionDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_question_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = QuestionService::new(&state.db);
    let detail = service.get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(detail.into_dto()))))
}

/// List questions carrying a tag.
///
/// # Returns
/// - `200 OK` - Paginated questions with this tag
/// - `404 Not Found` - Unknown tag
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/questions/tag/{name}",
    tag = QUESTION_TAG,
    params(
        ("name" = String, Path, description = "Tag name"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 50)")
    ),
    responses(
        (status = 200, description = "Paginated questions", body = PaginatedQuestionsDto),
        (status = 404, description = "Unknown tag", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_questions_by_tag(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = pagination.clamp();
    let service = QuestionService::new(&state.db);
    let questions = service
        .list_questions(ListQuestionsParams {
            page,
            per_page,
            search: None,
            tag: Some(name),
            user_id: None,
            sort: QuestionSort::Newest,
        })
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(questions.into_dto()))))
}

/// List questions by author.
///
/// # Returns
/// - `200 OK` - Paginated questions by this user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/questions/user/{user_id}",
    tag = QUESTION_TAG,
    params(
        ("user_id" = i32, Path, description = "Author's user ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 50)")
    ),
    responses(
        (status = 200, description = "Paginated questions", body = PaginatedQuestionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_questions_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = pagination.clamp();
    let service = QuestionService::new(&state.db);
    let questions = service
        .list_questions(ListQuestionsParams {
            page,
            per_page,
            search: None,
            tag: None,
            user_id: Some(user_id),
            sort: QuestionSort::Newest,
        })
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(questions.into_dto()))))
}

/// Create a question.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The new question with its tags
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/questions",
    tag = QUESTION_TAG,
    request_body = CreateQuestionDto,
    responses(
        (status = 201, description = "Question created", body = QuestionDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = QuestionService::new(&state.db);
    let detail = service
        .create_question(
            &user,
            CreateQuestionParams {
                user_id: user.id,
                title: payload.title,
                description: payload.description,
                tags: payload.tags,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(detail.into_dto())),
    ))
}

/// Update a question.
///
/// Only provided fields change. A new title regenerates the slug; a tags
/// list replaces the question's tag set.
///
/// # Access Control
/// - Question author, or moderator/admin
///
/// # Returns
/// - `200 OK` - Updated question
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the author and not a moderator
/// - `404 Not Found` - No question with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/questions/{id}",
    tag = QUESTION_TAG,
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionDto,
    responses(
        (status = 200, description = "Question updated", body = QuestionDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = QuestionService::new(&state.db);
    let detail = service
        .update_question(
            &user,
            id,
            UpdateQuestionParams {
                title: payload.title,
                description: payload.description,
                tags: payload.tags,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(detail.into_dto()))))
}

/// Delete a question.
///
/// Tag usage counters are released; answers, votes, and tag links fall to
/// the foreign-key cascade.
///
/// # Access Control
/// - Question author, or moderator/admin
///
/// # Returns
/// - `200 OK` - Question deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the author and not a moderator
/// - `404 Not Found` - No question with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    tag = QUESTION_TAG,
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = QuestionService::new(&state.db);
    service.delete_question(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Question deleted successfully")),
    ))
}

/// Accept an answer for a question.
///
/// Marks the answer accepted, un-accepting any previous one, and notifies
/// the answer's author.
///
/// # Access Control
/// - Question author only
///
/// # Returns
/// - `200 OK` - The accepted answer
/// - `400 Bad Request` - Answer belongs to another question
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the question's author
/// - `404 Not Found` - Question or answer not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/questions/{question_id}/accept/{answer_id}",
    tag = QUESTION_TAG,
    params(
        ("question_id" = i32, Path, description = "Question ID"),
        ("answer_id" = i32, Path, description = "Answer ID to accept")
    ),
    responses(
        (status = 200, description = "Answer accepted"),
        (status = 400, description = "Answer belongs to another question", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the question's author", body = ErrorDto),
        (status = 404, description = "Question or answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((question_id, answer_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AnswerService::new(&state.db);
    let answer = service
        .accept_for_question(&user, question_id, answer_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(answer.into_dto()))))
}

/// Clear a question's accepted answer.
///
/// # Access Control
/// - Question author only
///
/// # Returns
/// - `200 OK` - Acceptance cleared
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the question's author
/// - `404 Not Found` - Question not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/questions/{question_id}/accept",
    tag = QUESTION_TAG,
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Acceptance cleared"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the question's author", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unaccept_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(question_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AnswerService::new(&state.db);
    service.unaccept_for_question(&user, question_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Accepted answer cleared")),
    ))
}
