use crate::server::db::Db;
use std::time::Duration;
use test_utils::context::TestContext;

mod auth;
mod question;
mod vote;

/// Wraps a test context's connection in the application's database handle.
fn wrap(test: &TestContext) -> Db {
    Db::new(test.db.as_ref().unwrap().clone(), Duration::from_secs(5))
}
