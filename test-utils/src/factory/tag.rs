//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags with customizable fields.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    color: String,
    usage_count: i32,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - name: `"tag-{id}"` where id is auto-incremented
    /// - description: `None`
    /// - color: `"#808080"`
    /// - usage_count: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TagFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("tag-{}", id),
            description: None,
            color: "#808080".to_string(),
            usage_count: 0,
        }
    }

    /// Sets the name for the tag.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the tag.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the display color for the tag.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the stored usage count for the tag.
    pub fn usage_count(mut self, usage_count: i32) -> Self {
        self.usage_count = usage_count;
        self
    }

    /// Builds and inserts the tag entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tag::Model)` - Created tag entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            color: ActiveValue::Set(self.color),
            usage_count: ActiveValue::Set(self.usage_count),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
///
/// Shorthand for `TagFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::tag::Model)` - Created tag entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}

/// Creates a tag with a specific name.
///
/// Shorthand for `TagFactory::new(db).name(name).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Unique tag name
///
/// # Returns
/// - `Ok(entity::tag::Model)` - Created tag entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_tag_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).name(name).build().await
}
