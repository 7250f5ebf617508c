//! Question factory for creating test question entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test questions with customizable fields.
///
/// Provides a builder pattern for creating question entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::question::QuestionFactory;
///
/// let question = QuestionFactory::new(&db, user.id)
///     .title("How do I test this?")
///     .status("closed")
///     .build()
///     .await?;
/// ```
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    description: String,
    slug: String,
    status: String,
    vote_count: i32,
    answer_count: i32,
}

impl<'a> QuestionFactory<'a> {
    /// Creates a new QuestionFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Test Question {id}"` where id is auto-incremented
    /// - description: a paragraph long enough to pass content validation
    /// - slug: `"test-question-{id}"`
    /// - status: `"active"`
    /// - vote_count / answer_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the authoring user
    ///
    /// # Returns
    /// - `QuestionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Test Question {}", id),
            description: format!(
                "This is the body of test question {} with enough detail to be useful.",
                id
            ),
            slug: format!("test-question-{}", id),
            status: "active".to_string(),
            vote_count: 0,
            answer_count: 0,
        }
    }

    /// Sets the title for the question.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for the question.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the slug for the question.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the status for the question.
    ///
    /// # Arguments
    /// - `status` - One of `"active"`, `"closed"`, or `"deleted"`
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the stored vote count for the question.
    pub fn vote_count(mut self, vote_count: i32) -> Self {
        self.vote_count = vote_count;
        self
    }

    /// Sets the stored answer count for the question.
    pub fn answer_count(mut self, answer_count: i32) -> Self {
        self.answer_count = answer_count;
        self
    }

    /// Builds and inserts the question entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::question::Model)` - Created question entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        let now = Utc::now();
        entity::question::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            slug: ActiveValue::Set(self.slug),
            user_id: ActiveValue::Set(self.user_id),
            view_count: ActiveValue::Set(0),
            vote_count: ActiveValue::Set(self.vote_count),
            answer_count: ActiveValue::Set(self.answer_count),
            accepted_answer_id: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a question with default values.
///
/// Shorthand for `QuestionFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the authoring user
///
/// # Returns
/// - `Ok(entity::question::Model)` - Created question entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_question(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db, user_id).build().await
}
