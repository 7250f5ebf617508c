//! Axum route configuration and OpenAPI documentation.
//!
//! Builds one router per resource, merges them under `/api` with a global
//! per-IP rate limit, and applies a stricter limit to the credential
//! endpoints under `/api/auth`. The health endpoint and the Swagger UI are
//! mounted outside the throttled tree.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{answer, auth, health, notification, question, tag, vote},
    state::AppState,
};

/// Sustained replenish interval for the global `/api` limiter, one request
/// credit per this many milliseconds.
const API_REPLENISH_MS: u64 = 100;
/// Burst allowance for the global `/api` limiter.
const API_BURST: u32 = 50;

/// Sustained replenish interval for the `/api/auth` limiter, in seconds.
const AUTH_REPLENISH_SECS: u64 = 3;
/// Burst allowance for the `/api/auth` limiter.
const AUTH_BURST: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_profile,
        auth::update_profile,
        auth::change_password,
        auth::request_password_reset,
        auth::reset_password,
        auth::delete_account,
        question::list_questions,
        question::get_question_by_id,
        question::get_question_by_slug,
        question::get_questions_by_tag,
        question::get_questions_by_user,
        question::create_question,
        question::update_question,
        question::delete_question,
        question::accept_answer,
        question::unaccept_answer,
        answer::create_answer,
        answer::get_answer,
        answer::get_answers_by_question,
        answer::get_answers_by_user,
        answer::update_answer,
        answer::delete_answer,
        answer::accept_answer,
        answer::unaccept_answer,
        vote::cast_vote,
        vote::get_user_vote,
        vote::remove_vote,
        vote::count_votes,
        tag::list_tags,
        tag::popular_tags,
        tag::search_tags,
        tag::get_tags_for_question,
        tag::get_tag,
        tag::create_tag,
        tag::update_tag,
        tag::delete_tag,
        notification::list_notifications,
        notification::unread_count,
        notification::get_notification,
        notification::mark_read,
        notification::mark_all_read,
        notification::delete_notification,
        notification::delete_all_notifications,
        health::health,
    ),
    tags(
        (name = "auth", description = "Registration, login, and account management"),
        (name = "question", description = "Question CRUD, listing, and answer acceptance"),
        (name = "answer", description = "Answer CRUD and acceptance"),
        (name = "vote", description = "Voting on questions and answers"),
        (name = "tag", description = "Tag catalog and moderation"),
        (name = "notification", description = "Per-user notification inbox"),
        (name = "health", description = "Liveness and pool/cache statistics"),
    )
)]
pub struct ApiDoc;

/// Builds the application router with rate limiting, CORS, and Swagger UI.
///
/// The returned router still needs `AppState` attached via `with_state`.
pub fn router() -> Router<AppState> {
    let api_limit = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(API_REPLENISH_MS)
            .burst_size(API_BURST)
            .finish()
            .expect("non-zero rate limit config"),
    );
    let auth_limit = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(AUTH_REPLENISH_SECS)
            .burst_size(AUTH_BURST)
            .finish()
            .expect("non-zero rate limit config"),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let api = Router::new()
        .merge(question_routes())
        .merge(answer_routes())
        .merge(vote_routes())
        .merge(tag_routes())
        .merge(notification_routes())
        .layer(GovernorLayer::new(api_limit));

    let auth = auth_routes().layer(GovernorLayer::new(auth_limit));

    Router::new()
        .merge(api)
        .merge(auth)
        .route("/health", get(health::health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/auth/profile",
            get(auth::get_profile).put(auth::update_profile),
        )
        .route("/api/auth/change-password", put(auth::change_password))
        .route(
            "/api/auth/password-reset/request",
            post(auth::request_password_reset),
        )
        .route("/api/auth/password-reset", post(auth::reset_password))
        .route("/api/auth/account", delete(auth::delete_account))
}

fn question_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route("/api/questions/id/{id}", get(question::get_question_by_id))
        .route(
            "/api/questions/slug/{slug}",
            get(question::get_question_by_slug),
        )
        .route(
            "/api/questions/tag/{name}",
            get(question::get_questions_by_tag),
        )
        .route(
            "/api/questions/user/{user_id}",
            get(question::get_questions_by_user),
        )
        .route(
            "/api/questions/{id}",
            put(question::update_question).delete(question::delete_question),
        )
        .route(
            "/api/questions/{id}/accept/{answer_id}",
            post(question::accept_answer),
        )
        .route(
            "/api/questions/{id}/accept",
            delete(question::unaccept_answer),
        )
}

fn answer_routes() -> Router<AppState> {
    Router::new()
        .route("/api/answers", post(answer::create_answer))
        .route(
            "/api/answers/{id}",
            get(answer::get_answer)
                .put(answer::update_answer)
                .delete(answer::delete_answer),
        )
        .route(
            "/api/answers/question/{question_id}",
            get(answer::get_answers_by_question),
        )
        .route("/api/answers/user/{user_id}", get(answer::get_answers_by_user))
        .route("/api/answers/{id}/accept", patch(answer::accept_answer))
        .route("/api/answers/{id}/unaccept", patch(answer::unaccept_answer))
}

fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/api/votes", post(vote::cast_vote))
        .route(
            "/api/votes/user/{target_type}/{target_id}",
            get(vote::get_user_vote),
        )
        .route(
            "/api/votes/{target_type}/{target_id}",
            delete(vote::remove_vote),
        )
        .route(
            "/api/votes/count/{target_type}/{target_id}",
            get(vote::count_votes),
        )
}

fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/api/tags", get(tag::list_tags).post(tag::create_tag))
        .route("/api/tags/popular", get(tag::popular_tags))
        .route("/api/tags/search", get(tag::search_tags))
        .route(
            "/api/tags/question/{question_id}",
            get(tag::get_tags_for_question),
        )
        .route(
            "/api/tags/{id}",
            get(tag::get_tag)
                .put(tag::update_tag)
                .delete(tag::delete_tag),
        )
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/notifications",
            get(notification::list_notifications).delete(notification::delete_all_notifications),
        )
        .route(
            "/api/notifications/unread-count",
            get(notification::unread_count),
        )
        .route(
            "/api/notifications/{id}",
            get(notification::get_notification).delete(notification::delete_notification),
        )
        .route("/api/notifications/{id}/read", patch(notification::mark_read))
        .route(
            "/api/notifications/read-all",
            patch(notification::mark_all_read),
        )
}
