use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create tables.
    #[error("test database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
