//! Question data repository for database operations.
//!
//! This module provides the `QuestionRepository` for managing question records.
//! It handles creation with slug assignment, filtered and sorted list queries
//! joined with authors, and the atomic counter updates for views, votes, and
//! answers.

use crate::server::model::question::{QuestionSort, STATUS_ACTIVE};
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Question row joined with its author, as returned by list and detail queries.
pub type QuestionRow = (entity::question::Model, Option<entity::user::Model>);

/// Repository providing database operations for questions.
///
/// Generic over the connection so the same operations run on a pooled
/// connection or inside a transaction handle.
pub struct QuestionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuestionRepository<'a, C> {
    /// Creates a new QuestionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `QuestionRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new question with zeroed counters and active status.
    ///
    /// The slug must already be unique; collision probing happens in the
    /// service layer before this call.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authoring user
    /// - `title` - Question title
    /// - `description` - Question body
    /// - `slug` - Unique URL slug derived from the title
    ///
    /// # Returns
    /// - `Ok(Model)` - The created question
    /// - `Err(DbErr)` - Database error, including unique violation on the slug
    pub async fn create(
        &self,
        user_id: i32,
        title: String,
        description: String,
        slug: String,
    ) -> Result<entity::question::Model, DbErr> {
        let now = Utc::now();

        entity::question::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            slug: ActiveValue::Set(slug),
            user_id: ActiveValue::Set(user_id),
            view_count: ActiveValue::Set(0),
            vote_count: ActiveValue::Set(0),
            answer_count: ActiveValue::Set(0),
            status: ActiveValue::Set(STATUS_ACTIVE.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a question by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The question
    /// - `Ok(None)` - No question with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::question::Model>, DbErr> {
        entity::prelude::Question::find_by_id(id).one(self.db).await
    }

    /// Finds a question by ID joined with its author.
    ///
    /// # Returns
    /// - `Ok(Some((question, author)))` - The question; author is None when
    ///   the account has been deleted
    /// - `Ok(None)` - No question with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id_with_author(&self, id: i32) -> Result<Option<QuestionRow>, DbErr> {
        entity::prelude::Question::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Finds a question by slug joined with its author.
    ///
    /// # Returns
    /// - `Ok(Some((question, author)))` - The question; author is None when
    ///   the account has been deleted
    /// - `Ok(None)` - No question with this slug
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_slug_with_author(
        &self,
        slug: &str,
    ) -> Result<Option<QuestionRow>, DbErr> {
        entity::prelude::Question::find()
            .filter(entity::question::Column::Slug.eq(slug))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Checks whether a slug is already taken.
    ///
    /// # Arguments
    /// - `slug` - Candidate slug
    /// - `exclude_id` - Question to ignore, so title updates don't collide
    ///   with the question's own slug
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether another question already uses this slug
    /// - `Err(DbErr)` - Database error
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Question::find()
            .filter(entity::question::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::question::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets a filtered, sorted page of questions joined with their authors.
    ///
    /// Search matches case-insensitively against title and description. The
    /// tag filter restricts to questions linked to the given tag ID.
    ///
    /// # Arguments
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of questions per page
    /// - `search` - Optional case-insensitive substring filter
    /// - `tag_id` - Optional tag the questions must carry
    /// - `user_id` - Optional author filter
    /// - `sort` - Result ordering
    ///
    /// # Returns
    /// - `Ok((rows, totals))` - Page of question rows and the total item and
    ///   page counts for the query
    /// - `Err(DbErr)` - Database error
    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
        search: Option<&str>,
        tag_id: Option<i32>,
        user_id: Option<i32>,
        sort: QuestionSort,
    ) -> Result<(Vec<QuestionRow>, ItemsAndPagesNumber), DbErr> {
        let mut query = entity::prelude::Question::find()
            .find_also_related(entity::prelude::User);

        if let Some(search) = search {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Func::lower(Expr::col((
                            entity::question::Entity,
                            entity::question::Column::Title,
                        )))
                        .like(pattern.clone()),
                    )
                    .add(
                        Func::lower(Expr::col((
                            entity::question::Entity,
                            entity::question::Column::Description,
                        )))
                        .like(pattern),
                    ),
            );
        }

        if let Some(tag_id) = tag_id {
            query = query.filter(
                entity::question::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::question_tag::Column::QuestionId)
                        .from(entity::question_tag::Entity)
                        .and_where(entity::question_tag::Column::TagId.eq(tag_id))
                        .to_owned(),
                ),
            );
        }

        if let Some(user_id) = user_id {
            query = query.filter(entity::question::Column::UserId.eq(user_id));
        }

        query = match sort {
            QuestionSort::Newest => query.order_by_desc(entity::question::Column::CreatedAt),
            QuestionSort::Votes => query
                .order_by_desc(entity::question::Column::VoteCount)
                .order_by_desc(entity::question::Column::CreatedAt),
            QuestionSort::Answers => query
                .order_by_desc(entity::question::Column::AnswerCount)
                .order_by_desc(entity::question::Column::CreatedAt),
            QuestionSort::Views => query
                .order_by_desc(entity::question::Column::ViewCount)
                .order_by_desc(entity::question::Column::CreatedAt),
        };

        let paginator = query.paginate(self.db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((rows, totals))
    }

    /// Updates a question's title, slug, and description.
    ///
    /// Only fields provided are touched. The slug travels with the title; the
    /// service passes both or neither.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated question
    /// - `Err(DbErr::RecordNotFound)` - No question with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        title: Option<String>,
        slug: Option<String>,
        description: Option<String>,
    ) -> Result<entity::question::Model, DbErr> {
        let question = entity::prelude::Question::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Question {} not found", id)))?;

        let mut active_model: entity::question::ActiveModel = question.into();

        if let Some(title) = title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(slug) = slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = description {
            active_model.description = ActiveValue::Set(description);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Bumps a question's view counter by one in a single statement.
    ///
    /// # Returns
    /// - `Ok(())` - Counter bumped (no-op when the question is gone)
    /// - `Err(DbErr)` - Database error
    pub async fn increment_view_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Question::update_many()
            .col_expr(
                entity::question::Column::ViewCount,
                Expr::col(entity::question::Column::ViewCount).add(1),
            )
            .filter(entity::question::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies a signed delta to a question's vote counter in a single statement.
    ///
    /// # Returns
    /// - `Ok(())` - Counter adjusted
    /// - `Err(DbErr)` - Database error
    pub async fn apply_vote_delta(&self, id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Question::update_many()
            .col_expr(
                entity::question::Column::VoteCount,
                Expr::col(entity::question::Column::VoteCount).add(delta),
            )
            .filter(entity::question::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies a signed delta to a question's answer counter in a single statement.
    ///
    /// # Returns
    /// - `Ok(())` - Counter adjusted
    /// - `Err(DbErr)` - Database error
    pub async fn adjust_answer_count(&self, id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Question::update_many()
            .col_expr(
                entity::question::Column::AnswerCount,
                Expr::col(entity::question::Column::AnswerCount).add(delta),
            )
            .filter(entity::question::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets or clears the accepted answer pointer on a question.
    ///
    /// # Returns
    /// - `Ok(())` - Pointer updated
    /// - `Err(DbErr)` - Database error
    pub async fn set_accepted_answer(
        &self,
        id: i32,
        answer_id: Option<i32>,
    ) -> Result<(), DbErr> {
        entity::prelude::Question::update_many()
            .col_expr(
                entity::question::Column::AcceptedAnswerId,
                Expr::value(answer_id),
            )
            .filter(entity::question::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a question.
    ///
    /// Answers and tag links go with it through the foreign key cascade rules.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows deleted (0 when the question was gone)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Question::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
