use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        answer::{AnswerDto, CreateAnswerDto, PaginatedAnswersDto, UpdateAnswerDto},
        api::{ApiResponse, ErrorDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::answer::{AnswerSort, CreateAnswerParams},
        service::answer::AnswerService,
        state::AppState,
    },
};

use super::PaginationParams;

/// Tag for grouping answer endpoints in OpenAPI documentation
pub static ANSWER_TAG: &str = "answer";

#[derive(Deserialize)]
pub struct ListAnswersQuery {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub sort: Option<String>,
}

/// Post an answer to a question.
///
/// The question must be active. The question's answer count is bumped and
/// its author notified in the same transaction, unless they answered their
/// own question.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The new answer
/// - `400 Bad Request` - Content too short or question not accepting answers
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Question not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/answers",
    tag = ANSWER_TAG,
    request_body = CreateAnswerDto,
    responses(
        (status = 201, description = "Answer created", body = AnswerDto),
        (status = 400, description = "Validation failed or question closed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AnswerService::new(&state.db);
    let answer = service
        .create_answer(
            &user,
            CreateAnswerParams {
                question_id: payload.question_id,
                user_id: user.id,
                content: payload.content,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(answer.into_dto())),
    ))
}

/// Get one answer.
///
/// # Returns
/// - `200 OK` - The answer with its author
/// - `404 Not Found` - No answer with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/answers/{id}",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "Answer detail", body = AnswerDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_answer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AnswerService::new(&state.db);
    let answer = service.get_answer(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(answer.into_dto()))))
}

/// List a question's answers.
///
/// Default order pins the accepted answer first, then highest-voted, then
/// oldest. `sort=newest` orders purely by creation time.
///
/// # Returns
/// - `200 OK` - Paginated answers
/// - `404 Not Found` - Question not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/answers/question/{question_id}",
    tag = ANSWER_TAG,
    params(
        ("question_id" = i32, Path, description = "Question ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 50)"),
        ("sort" = Option<String>, Query, description = "Sort order: votes (default) or newest")
    ),
    responses(
        (status = 200, description = "Paginated answers", body = PaginatedAnswersDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_answers_by_question(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
    Query(query): Query<ListAnswersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = query.pagination.clamp();
    let service = AnswerService::new(&state.db);
    let answers = service
        .list_by_question(
            question_id,
            page,
            per_page,
            AnswerSort::parse(query.sort.as_deref()),
        )
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(answers.into_dto()))))
}

/// List answers by author, newest first.
///
/// # Returns
/// - `200 OK` - Paginated answers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/answers/user/{user_id}",
    tag = ANSWER_TAG,
    params(
        ("user_id" = i32, Path, description = "Author's user ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 50)")
    ),
    responses(
        (status = 200, description = "Paginated answers", body = PaginatedAnswersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_answers_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = pagination.clamp();
    let service = AnswerService::new(&state.db);
    let answers = service.list_by_user(user_id, page, per_page).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(answers.into_dto()))))
}

/// Update an answer's content.
///
/// # Access Control
/// - Answer author, or moderator/admin
///
/// # Returns
/// - `200 OK` - Updated answer
/// - `400 Bad Request` - Content out of bounds
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the author and not a moderator
/// - `404 Not Found` - No answer with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/answers/{id}",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    request_body = UpdateAnswerDto,
    responses(
        (status = 200, description = "Answer updated", body = AnswerDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AnswerService::new(&state.db);
    let answer = service.update_answer(&user, id, payload.content).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(answer.into_dto()))))
}

/// Delete an answer.
///
/// The parent question's answer count is decremented, and its accepted
/// answer pointer cleared when this answer held it.
///
/// # Access Control
/// - Answer author, or moderator/admin
///
/// # Returns
/// - `200 OK` - Answer deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the author and not a moderator
/// - `404 Not Found` - No answer with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/answers/{id}",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "Answer deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AnswerService::new(&state.db);
    service.delete_answer(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Answer deleted successfully")),
    ))
}

/// Accept an answer by its ID.
///
/// # Access Control
/// - The author of the answer's question
///
/// # Returns
/// - `200 OK` - The accepted answer
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the question's author
/// - `404 Not Found` - Answer not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/answers/{id}/accept",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "Answer accepted", body = AnswerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the question's author", body = ErrorDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AnswerService::new(&state.db);
    let answer = service.accept_answer(&user, id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(answer.into_dto()))))
}

/// Clear an answer's accepted mark by its ID.
///
/// # Access Control
/// - The author of the answer's question
///
/// # Returns
/// - `200 OK` - Acceptance cleared
/// - `400 Bad Request` - Answer is not currently accepted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the question's author
/// - `404 Not Found` - Answer not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/answers/{id}/unaccept",
    tag = ANSWER_TAG,
    params(
        ("id" = i32, Path, description = "Answer ID")
    ),
    responses(
        (status = 200, description = "Acceptance cleared"),
        (status = 400, description = "Answer is not accepted", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the question's author", body = ErrorDto),
        (status = 404, description = "Answer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unaccept_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = AnswerService::new(&state.db);
    service.unaccept_answer(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Accepted answer cleared")),
    ))
}
