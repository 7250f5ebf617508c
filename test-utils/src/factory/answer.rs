//! Answer factory for creating test answer entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test answers with customizable fields.
///
/// Inserts the answer row directly without touching the parent question's
/// `answer_count`; tests that care about counters should go through the
/// answer service instead.
pub struct AnswerFactory<'a> {
    db: &'a DatabaseConnection,
    question_id: i32,
    user_id: i32,
    content: String,
    is_accepted: bool,
    vote_count: i32,
}

impl<'a> AnswerFactory<'a> {
    /// Creates a new AnswerFactory with default values.
    ///
    /// Defaults:
    /// - content: `"This is test answer {id} with enough detail."`
    /// - is_accepted: `false`
    /// - vote_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `question_id` - ID of the parent question
    /// - `user_id` - ID of the authoring user
    ///
    /// # Returns
    /// - `AnswerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, question_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            question_id,
            user_id,
            content: format!(
                "This is test answer {} with enough detail to pass validation.",
                id
            ),
            is_accepted: false,
            vote_count: 0,
        }
    }

    /// Sets the content for the answer.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the accepted flag for the answer.
    pub fn is_accepted(mut self, is_accepted: bool) -> Self {
        self.is_accepted = is_accepted;
        self
    }

    /// Sets the stored vote count for the answer.
    pub fn vote_count(mut self, vote_count: i32) -> Self {
        self.vote_count = vote_count;
        self
    }

    /// Builds and inserts the answer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::answer::Model)` - Created answer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::answer::Model, DbErr> {
        let now = Utc::now();
        entity::answer::ActiveModel {
            content: ActiveValue::Set(self.content),
            question_id: ActiveValue::Set(self.question_id),
            user_id: ActiveValue::Set(self.user_id),
            is_accepted: ActiveValue::Set(self.is_accepted),
            vote_count: ActiveValue::Set(self.vote_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an answer with default values.
///
/// Shorthand for `AnswerFactory::new(db, question_id, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `question_id` - ID of the parent question
/// - `user_id` - ID of the authoring user
///
/// # Returns
/// - `Ok(entity::answer::Model)` - Created answer entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_answer(
    db: &DatabaseConnection,
    question_id: i32,
    user_id: i32,
) -> Result<entity::answer::Model, DbErr> {
    AnswerFactory::new(db, question_id, user_id).build().await
}
