//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database handle wrapping the connection pool
//! - Response cache for hot read endpoints
//! - JWT codec for issuing and verifying tokens
//! - Bcrypt cost factor used when hashing passwords

use std::time::Duration;

use sea_orm::DatabaseConnection;

use super::{cache::ResponseCache, config::Config, db::Db, token::JwtCodec};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `Db` wraps a `DatabaseConnection` pool (clones share the pool)
/// - `ResponseCache` uses `Arc` for its shared map and counters
/// - `JwtCodec` holds pre-built encoding/decoding keys
/// - `u32` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database handle wrapping the connection pool.
    ///
    /// Shared across all requests. Transactions begun through this handle log
    /// a warning when pool acquisition exceeds the configured threshold.
    pub db: Db,

    /// In-memory response cache for list endpoints.
    ///
    /// Stores serialized response bodies keyed by request URI with a
    /// configurable TTL. Stats are surfaced through the health endpoint.
    pub cache: ResponseCache,

    /// Codec for issuing and verifying JWT auth and password-reset tokens.
    pub jwt: JwtCodec,

    /// Bcrypt cost factor applied when hashing passwords.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates a new application state from configuration and a connected database.
    ///
    /// This constructor is called once during server startup after the database
    /// connection has been established and migrations have run. The resulting
    /// state is then provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `config` - Application configuration
    /// - `conn` - Connected database pool with migrations applied
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(config: &Config, conn: DatabaseConnection) -> Self {
        Self {
            db: Db::new(
                conn,
                Duration::from_millis(config.slow_acquire_threshold_ms),
            ),
            cache: ResponseCache::new(Duration::from_secs(config.cache_ttl_secs)),
            jwt: JwtCodec::new(&config.jwt_secret),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
