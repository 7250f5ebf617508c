//! Database handle with slow-acquisition diagnostics.

use std::ops::Deref;
use std::time::{Duration, Instant};

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// Shared handle over the SeaORM connection pool.
///
/// Dereferences to `DatabaseConnection` for plain queries. `begin` is timed:
/// when the bounded pool is saturated, opening a transaction waits for a free
/// connection, and waits beyond the configured threshold are logged so pool
/// pressure shows up in the logs before it shows up as timeouts.
#[derive(Clone)]
pub struct Db {
    conn: DatabaseConnection,
    slow_acquire_threshold: Duration,
}

impl Db {
    pub fn new(conn: DatabaseConnection, slow_acquire_threshold: Duration) -> Self {
        Self {
            conn,
            slow_acquire_threshold,
        }
    }

    /// Returns the underlying connection, used to construct repositories.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Opens a transaction, logging when acquiring one took longer than the
    /// slow-acquisition threshold.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        let started = Instant::now();
        let txn = self.conn.begin().await?;

        let waited = started.elapsed();
        if waited >= self.slow_acquire_threshold {
            tracing::warn!(
                waited_ms = waited.as_millis() as u64,
                threshold_ms = self.slow_acquire_threshold.as_millis() as u64,
                "slow database connection acquisition"
            );
        }

        Ok(txn)
    }
}

impl Deref for Db {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}
