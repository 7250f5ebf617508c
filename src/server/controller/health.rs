use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{ConnectionTrait, DbBackend};

use crate::{
    model::api::{CacheStatsDto, HealthDto, PoolStatsDto},
    server::state::AppState,
};

/// Tag for grouping the health endpoint in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report service health.
///
/// Pings the database, and reports pool occupancy and response cache
/// statistics. Not rate limited so external probes always get through.
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `503 Service Unavailable` - Database ping failed
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service healthy", body = HealthDto),
        (status = 503, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.db.connection().ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("health check database ping failed: {}", err);
            false
        }
    };

    let pool = pool_stats(&state);
    let cache = state.cache.stats().await;

    let status = if database { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };

    (
        status,
        Json(HealthDto {
            status: if database { "ok" } else { "unavailable" }.to_string(),
            database,
            pool,
            cache: CacheStatsDto {
                entries: cache.entries,
                hits: cache.hits,
                misses: cache.misses,
            },
        }),
    )
}

/// Reads occupancy counters from the underlying sqlx pool.
///
/// Only the Postgres backend exposes its pool; the SQLite backend used in
/// tests reports zeros.
fn pool_stats(state: &AppState) -> PoolStatsDto {
    let conn = state.db.connection();
    if conn.get_database_backend() == DbBackend::Postgres {
        let pool = conn.get_postgres_connection_pool();
        PoolStatsDto {
            size: pool.size(),
            idle: pool.num_idle() as u32,
        }
    } else {
        PoolStatsDto { size: 0, idle: 0 }
    }
}
