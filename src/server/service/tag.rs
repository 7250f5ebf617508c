//! Tag service for business logic.
//!
//! This module owns tag naming rules and the question-tag association
//! maintenance. Names are normalized to trimmed lowercase everywhere so
//! lookups stay case-insensitive, and `set_question_tags` keeps the
//! denormalized usage_count equal to the number of question links by
//! adjusting it exactly once per created or removed link.

use std::collections::HashSet;

use sea_orm::ConnectionTrait;

use crate::server::{
    data::tag::TagRepository,
    db::Db,
    error::AppError,
    model::tag::{CreateTagParams, ListTagsParams, PaginatedTags, TagSort, UpdateTagParams},
    util::validate::Validator,
};

/// Service providing business logic for tags.
pub struct TagService<'a> {
    pub db: &'a Db,
}

impl<'a> TagService<'a> {
    /// Creates a new TagService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database handle
    ///
    /// # Returns
    /// - `TagService` - New service instance
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Gets a filtered, sorted page of tags.
    ///
    /// # Returns
    /// - `Ok(PaginatedTags)` - Tags with pagination metadata
    /// - `Err(AppError)` - Database error
    pub async fn list_tags(&self, params: ListTagsParams) -> Result<PaginatedTags, AppError> {
        let (tags, totals) = TagRepository::new(self.db.connection())
            .list(
                params.page - 1,
                params.per_page,
                params.search.as_deref(),
                params.sort,
            )
            .await?;

        Ok(PaginatedTags {
            tags,
            total: totals.number_of_items,
            page: params.page,
            per_page: params.per_page,
            total_pages: totals.number_of_pages,
        })
    }

    /// Gets the most used tags.
    ///
    /// # Returns
    /// - `Ok(tags)` - Up to `limit` tags by usage
    /// - `Err(AppError)` - Database error
    pub async fn popular_tags(&self, limit: u64) -> Result<Vec<entity::tag::Model>, AppError> {
        Ok(TagRepository::new(self.db.connection())
            .popular(limit)
            .await?)
    }

    /// Searches tags by name or description for autocomplete.
    ///
    /// # Returns
    /// - `Ok(tags)` - Up to ten matching tags, most used first
    /// - `Err(AppError)` - Database error
    pub async fn search_tags(&self, query: &str) -> Result<Vec<entity::tag::Model>, AppError> {
        let (tags, _) = TagRepository::new(self.db.connection())
            .list(0, 10, Some(query), TagSort::Usage)
            .await?;

        Ok(tags)
    }

    /// Gets one tag by numeric ID or exact name.
    ///
    /// # Returns
    /// - `Ok(Model)` - The tag
    /// - `Err(AppError::NotFound)` - No matching tag
    /// - `Err(AppError)` - Database error
    pub async fn get_tag(&self, id_or_name: &str) -> Result<entity::tag::Model, AppError> {
        let repo = TagRepository::new(self.db.connection());

        let tag = match id_or_name.parse::<i32>() {
            Ok(id) => repo.find_by_id(id).await?,
            Err(_) => repo.find_by_name(&normalize_name(id_or_name)).await?,
        };

        tag.ok_or_else(|| AppError::NotFound("Tag not found".to_string()))
    }

    /// Gets the tags linked to one question.
    ///
    /// # Returns
    /// - `Ok(tags)` - The question's tags, ordered by name
    /// - `Err(AppError)` - Database error
    pub async fn tags_for_question(
        &self,
        question_id: i32,
    ) -> Result<Vec<entity::tag::Model>, AppError> {
        Ok(TagRepository::new(self.db.connection())
            .for_question(question_id)
            .await?)
    }

    /// Creates a tag with a normalized, unique name.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created tag
    /// - `Err(AppError::Validation)` - Name, description, or color invalid
    /// - `Err(AppError::Conflict)` - A tag with this name already exists
    /// - `Err(AppError)` - Database error
    pub async fn create_tag(
        &self,
        mut params: CreateTagParams,
    ) -> Result<entity::tag::Model, AppError> {
        params.name = normalize_name(&params.name);

        let mut validator = Validator::new();
        validator.tag_name(&params.name);
        if let Some(ref description) = params.description {
            validator.tag_description(description);
        }
        if let Some(ref color) = params.color {
            validator.tag_color(color);
        }
        validator.finish()?;

        let repo = TagRepository::new(self.db.connection());
        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(
                "A tag with this name already exists".to_string(),
            ));
        }

        repo.create(params).await.map_err(|err| match err.sql_err() {
            // Lost the probe-then-insert race against a concurrent create.
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("A tag with this name already exists".to_string())
            }
            _ => err.into(),
        })
    }

    /// Updates a tag's description and color. Names are immutable.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated tag
    /// - `Err(AppError::Validation)` - Description or color invalid
    /// - `Err(AppError::NotFound)` - No tag with this ID
    /// - `Err(AppError)` - Database error
    pub async fn update_tag(
        &self,
        id: i32,
        params: UpdateTagParams,
    ) -> Result<entity::tag::Model, AppError> {
        let mut validator = Validator::new();
        if let Some(ref description) = params.description {
            validator.tag_description(description);
        }
        if let Some(ref color) = params.color {
            validator.tag_color(color);
        }
        validator.finish()?;

        let repo = TagRepository::new(self.db.connection());
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;

        Ok(repo.update(id, params).await?)
    }

    /// Deletes an unused tag.
    ///
    /// # Returns
    /// - `Ok(())` - Tag deleted
    /// - `Err(AppError::NotFound)` - No tag with this ID
    /// - `Err(AppError::Conflict)` - Tag is still linked to questions
    /// - `Err(AppError)` - Database error
    pub async fn delete_tag(&self, id: i32) -> Result<(), AppError> {
        let repo = TagRepository::new(self.db.connection());
        let tag = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;

        if tag.usage_count > 0 {
            return Err(AppError::Conflict(
                "Cannot delete a tag that is still in use".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }
}

/// Replaces a question's tag set with the given names.
///
/// Normalizes and dedupes the names, creates tags that do not exist yet,
/// links new ones, and unlinks tags absent from the new set, adjusting
/// usage_count once per created or removed link. Runs on the caller's
/// connection so question create/update can include it in their
/// transaction.
///
/// # Arguments
/// - `db` - Connection or transaction handle
/// - `question_id` - Question whose associations are replaced
/// - `names` - Desired tag names, in any case or spacing
///
/// # Returns
/// - `Ok(tags)` - The question's tags after the update, ordered by name
/// - `Err(AppError)` - Database error
pub async fn set_question_tags<C: ConnectionTrait>(
    db: &C,
    question_id: i32,
    names: &[String],
) -> Result<Vec<entity::tag::Model>, AppError> {
    let repo = TagRepository::new(db);

    let desired: Vec<String> = {
        let mut seen = HashSet::new();
        names
            .iter()
            .map(|name| normalize_name(name))
            .filter(|name| !name.is_empty())
            .filter(|name| seen.insert(name.clone()))
            .collect()
    };

    let current = repo.for_question(question_id).await?;
    let desired_set: HashSet<&str> = desired.iter().map(String::as_str).collect();

    // Unlink tags that fell out of the set.
    for tag in &current {
        if !desired_set.contains(tag.name.as_str()) && repo.unlink(question_id, tag.id).await? {
            repo.decrement_usage(tag.id).await?;
        }
    }

    // Create missing tags and link everything new.
    for name in &desired {
        let tag = match repo.find_by_name(name).await? {
            Some(tag) => tag,
            None => {
                repo.create(CreateTagParams {
                    name: name.clone(),
                    description: None,
                    color: None,
                })
                .await?
            }
        };

        if repo.link(question_id, tag.id).await? {
            repo.increment_usage(tag.id).await?;
        }
    }

    Ok(repo.for_question(question_id).await?)
}

/// Canonical form of a tag name: trimmed and lowercased.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
