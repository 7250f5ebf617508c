//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a question together with its author.
///
/// Convenience method for tests that only need a question and do not care
/// who wrote it. Both entities are created with default values; use the
/// individual factories to customize either.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, question))` - Created author and question
/// - `Err(DbErr)` - Database error during creation
pub async fn create_question_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::question::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let question = crate::factory::question::create_question(db, user.id).await?;

    Ok((user, question))
}

/// Creates a question, its author, and an answer from a second user.
///
/// Convenience method for voting and acceptance tests that need the full
/// question/answer shape with distinct authors.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((asker, answerer, question, answer))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_answered_question(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::question::Model,
        entity::answer::Model,
    ),
    DbErr,
> {
    let asker = crate::factory::user::create_user(db).await?;
    let answerer = crate::factory::user::create_user(db).await?;
    let question = crate::factory::question::create_question(db, asker.id).await?;
    let answer = crate::factory::answer::create_answer(db, question.id, answerer.id).await?;

    Ok((asker, answerer, question, answer))
}
