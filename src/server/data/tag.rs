//! Tag data repository for database operations.
//!
//! This module provides the `TagRepository` for managing tags and their
//! associations to questions through the question_tags join table. Usage
//! counters are adjusted with guarded single-statement updates so they never
//! drift below zero under concurrent unlinking.

use crate::server::model::tag::{CreateTagParams, TagSort, UpdateTagParams, DEFAULT_TAG_COLOR};
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    ItemsAndPagesNumber, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Repository providing database operations for tags and question-tag links.
///
/// Generic over the connection so the same operations run on a pooled
/// connection or inside a transaction handle.
pub struct TagRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new TagRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `TagRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new tag with a zeroed usage counter.
    ///
    /// The name must already be normalized to lowercase by the caller. A
    /// missing color falls back to the default badge color.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created tag
    /// - `Err(DbErr)` - Database error, including unique violation on the name
    pub async fn create(&self, params: CreateTagParams) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            color: ActiveValue::Set(
                params
                    .color
                    .unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string()),
            ),
            usage_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a tag by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The tag
    /// - `Ok(None)` - No tag with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find_by_id(id).one(self.db).await
    }

    /// Finds a tag by its exact name.
    ///
    /// Names are stored lowercase, so the caller normalizes before lookup.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The tag
    /// - `Ok(None)` - No tag with this name
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets a filtered, sorted page of tags.
    ///
    /// Search matches case-insensitively against name and description.
    ///
    /// # Arguments
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of tags per page
    /// - `search` - Optional case-insensitive substring filter
    /// - `sort` - Result ordering
    ///
    /// # Returns
    /// - `Ok((tags, totals))` - Page of tags and the total item and page
    ///   counts for the query
    /// - `Err(DbErr)` - Database error
    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
        search: Option<&str>,
        sort: TagSort,
    ) -> Result<(Vec<entity::tag::Model>, ItemsAndPagesNumber), DbErr> {
        let mut query = entity::prelude::Tag::find();

        if let Some(search) = search {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(entity::tag::Column::Name).like(pattern.clone()))
                    .add(
                        Func::lower(Expr::col(entity::tag::Column::Description))
                            .like(pattern),
                    ),
            );
        }

        query = match sort {
            TagSort::Usage => query
                .order_by_desc(entity::tag::Column::UsageCount)
                .order_by_asc(entity::tag::Column::Name),
            TagSort::Name => query.order_by_asc(entity::tag::Column::Name),
            TagSort::Newest => query.order_by_desc(entity::tag::Column::CreatedAt),
        };

        let paginator = query.paginate(self.db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let tags = paginator.fetch_page(page).await?;

        Ok((tags, totals))
    }

    /// Gets the most used tags, name breaking ties.
    ///
    /// # Returns
    /// - `Ok(tags)` - Up to `limit` tags ordered by usage
    /// - `Err(DbErr)` - Database error
    pub async fn popular(&self, limit: u64) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_desc(entity::tag::Column::UsageCount)
            .order_by_asc(entity::tag::Column::Name)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets the tags linked to one question, ordered by name.
    ///
    /// # Returns
    /// - `Ok(tags)` - The question's tags
    /// - `Err(DbErr)` - Database error
    pub async fn for_question(&self, question_id: i32) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .inner_join(entity::prelude::QuestionTag)
            .filter(entity::question_tag::Column::QuestionId.eq(question_id))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the tags linked to a set of questions in one query.
    ///
    /// Used by the question list endpoints to decorate a page of questions
    /// without a query per row.
    ///
    /// # Returns
    /// - `Ok(pairs)` - (question_id, tag) pairs ordered by tag name
    /// - `Err(DbErr)` - Database error
    pub async fn for_questions(
        &self,
        question_ids: &[i32],
    ) -> Result<Vec<(i32, entity::tag::Model)>, DbErr> {
        if question_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::QuestionTag::find()
            .find_also_related(entity::prelude::Tag)
            .filter(entity::question_tag::Column::QuestionId.is_in(question_ids.to_vec()))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, tag)| tag.map(|tag| (link.question_id, tag)))
            .collect())
    }

    /// Updates a tag's description and color.
    ///
    /// Only fields provided are touched. Names are immutable once created.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated tag
    /// - `Err(DbErr::RecordNotFound)` - No tag with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTagParams,
    ) -> Result<entity::tag::Model, DbErr> {
        let tag = entity::prelude::Tag::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Tag {} not found", id)))?;

        let mut active_model: entity::tag::ActiveModel = tag.into();

        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color);
        }

        active_model.update(self.db).await
    }

    /// Links a tag to a question if the link does not already exist.
    ///
    /// # Returns
    /// - `Ok(true)` - Link created
    /// - `Ok(false)` - Link already existed
    /// - `Err(DbErr)` - Database error
    pub async fn link(&self, question_id: i32, tag_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::QuestionTag::find_by_id((question_id, tag_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::question_tag::ActiveModel {
            question_id: ActiveValue::Set(question_id),
            tag_id: ActiveValue::Set(tag_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes the link between a tag and a question.
    ///
    /// # Returns
    /// - `Ok(true)` - Link removed
    /// - `Ok(false)` - No such link
    /// - `Err(DbErr)` - Database error
    pub async fn unlink(&self, question_id: i32, tag_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::QuestionTag::delete_by_id((question_id, tag_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Bumps a tag's usage counter by one in a single statement.
    ///
    /// # Returns
    /// - `Ok(())` - Counter bumped
    /// - `Err(DbErr)` - Database error
    pub async fn increment_usage(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Tag::update_many()
            .col_expr(
                entity::tag::Column::UsageCount,
                Expr::col(entity::tag::Column::UsageCount).add(1),
            )
            .filter(entity::tag::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Drops a tag's usage counter by one, floored at zero.
    ///
    /// The floor is part of the statement's filter, so concurrent unlinks
    /// cannot push the counter negative.
    ///
    /// # Returns
    /// - `Ok(())` - Counter dropped (no-op at zero)
    /// - `Err(DbErr)` - Database error
    pub async fn decrement_usage(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Tag::update_many()
            .col_expr(
                entity::tag::Column::UsageCount,
                Expr::col(entity::tag::Column::UsageCount).sub(1),
            )
            .filter(entity::tag::Column::Id.eq(id))
            .filter(entity::tag::Column::UsageCount.gt(0))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a tag.
    ///
    /// The service refuses deletion while the tag is still in use, so the
    /// cascade on question_tags only ever removes stale links.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows deleted (0 when the tag was gone)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
