//! Answer data repository for database operations.

use crate::server::model::answer::{AnswerSort, CreateAnswerParams};
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Answer row joined with its author, as returned by list and detail queries.
pub type AnswerRow = (entity::answer::Model, Option<entity::user::Model>);

/// Repository providing database operations for answers.
///
/// Generic over the connection so the same operations run on a pooled
/// connection or inside a transaction handle.
pub struct AnswerRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnswerRepository<'a, C> {
    /// Creates a new AnswerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `AnswerRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new answer with a zeroed vote counter.
    ///
    /// The parent question's answer_count is a separate statement; the
    /// service runs both inside one transaction.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created answer
    /// - `Err(DbErr)` - Database error, including foreign key violation when
    ///   the question is gone
    pub async fn create(&self, params: CreateAnswerParams) -> Result<entity::answer::Model, DbErr> {
        let now = Utc::now();

        entity::answer::ActiveModel {
            content: ActiveValue::Set(params.content),
            question_id: ActiveValue::Set(params.question_id),
            user_id: ActiveValue::Set(params.user_id),
            is_accepted: ActiveValue::Set(false),
            vote_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an answer by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The answer
    /// - `Ok(None)` - No answer with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::answer::Model>, DbErr> {
        entity::prelude::Answer::find_by_id(id).one(self.db).await
    }

    /// Finds an answer by ID joined with its author.
    ///
    /// # Returns
    /// - `Ok(Some((answer, author)))` - The answer; author is None when the
    ///   account has been deleted
    /// - `Ok(None)` - No answer with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id_with_author(&self, id: i32) -> Result<Option<AnswerRow>, DbErr> {
        entity::prelude::Answer::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Gets a sorted page of answers for one question, joined with authors.
    ///
    /// # Arguments
    /// - `question_id` - Question whose answers are listed
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of answers per page
    /// - `sort` - Result ordering
    ///
    /// # Returns
    /// - `Ok((rows, totals))` - Page of answer rows and the total item and
    ///   page counts for the question
    /// - `Err(DbErr)` - Database error
    pub async fn list_by_question(
        &self,
        question_id: i32,
        page: u64,
        per_page: u64,
        sort: AnswerSort,
    ) -> Result<(Vec<AnswerRow>, ItemsAndPagesNumber), DbErr> {
        let query = Self::sorted(
            entity::prelude::Answer::find()
                .filter(entity::answer::Column::QuestionId.eq(question_id))
                .find_also_related(entity::prelude::User),
            sort,
        );

        let paginator = query.paginate(self.db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((rows, totals))
    }

    /// Gets every answer for one question joined with authors, vote-ordered.
    ///
    /// Used by the question detail endpoints, which embed the full answer
    /// list.
    ///
    /// # Returns
    /// - `Ok(rows)` - All answer rows for the question
    /// - `Err(DbErr)` - Database error
    pub async fn all_by_question(&self, question_id: i32) -> Result<Vec<AnswerRow>, DbErr> {
        Self::sorted(
            entity::prelude::Answer::find()
                .filter(entity::answer::Column::QuestionId.eq(question_id))
                .find_also_related(entity::prelude::User),
            AnswerSort::Votes,
        )
        .all(self.db)
        .await
    }

    /// Gets a page of answers by one author, newest first, joined with the
    /// author row.
    ///
    /// # Returns
    /// - `Ok((rows, totals))` - Page of answer rows and the total item and
    ///   page counts for the author
    /// - `Err(DbErr)` - Database error
    pub async fn list_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<AnswerRow>, ItemsAndPagesNumber), DbErr> {
        let query = entity::prelude::Answer::find()
            .filter(entity::answer::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::answer::Column::CreatedAt);

        let paginator = query.paginate(self.db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((rows, totals))
    }

    /// Replaces an answer's content.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated answer
    /// - `Err(DbErr::RecordNotFound)` - No answer with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn update_content(
        &self,
        id: i32,
        content: String,
    ) -> Result<entity::answer::Model, DbErr> {
        let answer = entity::prelude::Answer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Answer {} not found", id)))?;

        let mut active_model: entity::answer::ActiveModel = answer.into();
        active_model.content = ActiveValue::Set(content);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Sets or clears the accepted flag on one answer.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated answer
    /// - `Err(DbErr::RecordNotFound)` - No answer with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn set_accepted(
        &self,
        id: i32,
        accepted: bool,
    ) -> Result<entity::answer::Model, DbErr> {
        let answer = entity::prelude::Answer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Answer {} not found", id)))?;

        let mut active_model: entity::answer::ActiveModel = answer.into();
        active_model.is_accepted = ActiveValue::Set(accepted);

        active_model.update(self.db).await
    }

    /// Clears the accepted flag from every answer of a question.
    ///
    /// Runs before accepting a new answer so at most one answer per question
    /// carries the flag.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of answers cleared
    /// - `Err(DbErr)` - Database error
    pub async fn clear_accepted_for_question(&self, question_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Answer::update_many()
            .col_expr(entity::answer::Column::IsAccepted, Expr::value(false))
            .filter(entity::answer::Column::QuestionId.eq(question_id))
            .filter(entity::answer::Column::IsAccepted.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Applies a signed delta to an answer's vote counter in a single statement.
    ///
    /// # Returns
    /// - `Ok(())` - Counter adjusted
    /// - `Err(DbErr)` - Database error
    pub async fn apply_vote_delta(&self, id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Answer::update_many()
            .col_expr(
                entity::answer::Column::VoteCount,
                Expr::col(entity::answer::Column::VoteCount).add(delta),
            )
            .filter(entity::answer::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes an answer.
    ///
    /// Bookkeeping on the parent question (answer_count, accepted answer
    /// pointer) is the service's responsibility, inside one transaction.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows deleted (0 when the answer was gone)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Answer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn sorted(
        query: sea_orm::SelectTwo<entity::prelude::Answer, entity::prelude::User>,
        sort: AnswerSort,
    ) -> sea_orm::SelectTwo<entity::prelude::Answer, entity::prelude::User> {
        match sort {
            AnswerSort::Votes => query
                .order_by_desc(entity::answer::Column::IsAccepted)
                .order_by_desc(entity::answer::Column::VoteCount)
                .order_by_asc(entity::answer::Column::CreatedAt),
            AnswerSort::Newest => query.order_by_desc(entity::answer::Column::CreatedAt),
            AnswerSort::Oldest => query.order_by_asc(entity::answer::Column::CreatedAt),
        }
    }
}
