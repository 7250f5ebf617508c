//! Vote factory for creating test vote entities.
//!
//! Inserts vote rows directly without adjusting target vote counts or
//! author reputation; tests covering those side effects should go through
//! the vote service instead.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a vote row for a user on a target.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the voting user
/// - `target_type` - `"question"` or `"answer"`
/// - `target_id` - ID of the voted content
/// - `vote_type` - `1` for upvote, `-1` for downvote
///
/// # Returns
/// - `Ok(entity::vote::Model)` - Created vote entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_vote(
    db: &DatabaseConnection,
    user_id: i32,
    target_type: &str,
    target_id: i32,
    vote_type: i32,
) -> Result<entity::vote::Model, DbErr> {
    let now = Utc::now();
    entity::vote::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        target_type: ActiveValue::Set(target_type.to_string()),
        target_id: ActiveValue::Set(target_id),
        vote_type: ActiveValue::Set(vote_type),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
