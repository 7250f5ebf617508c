use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        vote::{CastVoteDto, UserVoteDto, VoteCountsDto, VoteResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::vote::{CastVoteParams, VoteTarget},
        service::vote::VoteService,
        state::AppState,
    },
};

/// Tag for grouping vote endpoints in OpenAPI documentation
pub static VOTE_TAG: &str = "vote";

/// Cast a vote on a question or answer.
///
/// Voting is a toggle: repeating the same direction cancels the vote,
/// voting the opposite direction switches it. The target's vote count and
/// its author's reputation move atomically with the vote row; a fresh
/// upvote notifies the author.
///
/// # Access Control
/// - Any authenticated user; self-votes are rejected
///
/// # Arguments
/// - `state` - Application state containing the database
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Target type, target ID, and vote direction
///
/// # Returns
/// - `200 OK` - Vote state after the operation with fresh tallies
/// - `400 Bad Request` - Bad target type, bad direction, or self-vote
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Target does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/votes",
    tag = VOTE_TAG,
    request_body = CastVoteDto,
    responses(
        (status = 200, description = "Vote recorded", body = VoteResultDto),
        (status = 400, description = "Invalid target, direction, or self-vote", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CastVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = VoteService::new(&state.db);
    let outcome = service
        .cast_vote(CastVoteParams {
            user_id: user.id,
            target: VoteTarget::parse(&payload.target_type)?,
            target_id: payload.target_id,
            vote_type: payload.vote_type,
        })
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(outcome.into_dto()))))
}

/// Get the caller's vote on a target.
///
/// `vote_type` is 0 when the caller has not voted. Tallies for the target
/// ride along.
///
/// # Returns
/// - `200 OK` - Vote state and tallies
/// - `400 Bad Request` - Bad target type
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Target does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/votes/user/{target_type}/{target_id}",
    tag = VOTE_TAG,
    params(
        ("target_type" = String, Path, description = "question or answer"),
        ("target_id" = i32, Path, description = "Target ID")
    ),
    responses(
        (status = 200, description = "Caller's vote state", body = UserVoteDto),
        (status = 400, description = "Invalid target type", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_vote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((target_type, target_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = VoteService::new(&state.db);
    let vote = service
        .get_user_vote(user.id, VoteTarget::parse(&target_type)?, target_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(vote.into_dto()))))
}

/// Remove the caller's vote from a target.
///
/// Unlike re-casting the same direction, this fails when no vote exists.
///
/// # Returns
/// - `200 OK` - Vote removed, tallies refreshed
/// - `400 Bad Request` - Bad target type
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Target or vote does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/votes/{target_type}/{target_id}",
    tag = VOTE_TAG,
    params(
        ("target_type" = String, Path, description = "question or answer"),
        ("target_id" = i32, Path, description = "Target ID")
    ),
    responses(
        (status = 200, description = "Vote removed", body = VoteResultDto),
        (status = 400, description = "Invalid target type", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Target or vote not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_vote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((target_type, target_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(state.db.connection(), &state.jwt)
        .require(&headers, &[])
        .await?;

    let service = VoteService::new(&state.db);
    let outcome = service
        .remove_vote(user.id, VoteTarget::parse(&target_type)?, target_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(outcome.into_dto()))))
}

/// Tally the votes on a target.
///
/// # Returns
/// - `200 OK` - Upvotes, downvotes, and signed total
/// - `400 Bad Request` - Bad target type
/// - `404 Not Found` - Target does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/votes/count/{target_type}/{target_id}",
    tag = VOTE_TAG,
    params(
        ("target_type" = String, Path, description = "question or answer"),
        ("target_id" = i32, Path, description = "Target ID")
    ),
    responses(
        (status = 200, description = "Vote tallies", body = VoteCountsDto),
        (status = 400, description = "Invalid target type", body = ErrorDto),
        (status = 404, description = "Target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_votes(
    State(state): State<AppState>,
    Path((target_type, target_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = VoteService::new(&state.db);
    let counts = service
        .count_votes(VoteTarget::parse(&target_type)?, target_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(counts.into_dto()))))
}
