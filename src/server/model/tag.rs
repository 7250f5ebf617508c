//! Tag domain models and parameters.

use crate::model::tag::{PaginatedTagsDto, TagDto};

/// Badge color assigned to tags created without an explicit color.
pub const DEFAULT_TAG_COLOR: &str = "#2196F3";

/// Parameters for creating a new tag.
///
/// The name is normalized to lowercase before insertion so lookups stay
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct CreateTagParams {
    /// Unique tag name.
    pub name: String,
    /// Optional description of what the tag covers.
    pub description: Option<String>,
    /// Optional badge color, defaults to [`DEFAULT_TAG_COLOR`].
    pub color: Option<String>,
}

/// Parameters for updating an existing tag.
///
/// All fields are optional - only provided fields will be updated. Names are
/// immutable once created; questions link to tags by id.
#[derive(Debug, Clone, Default)]
pub struct UpdateTagParams {
    /// New description text.
    pub description: Option<String>,
    /// New badge color.
    pub color: Option<String>,
}

/// Sort orders accepted by the tag list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSort {
    /// Most used first, name breaking ties.
    Usage,
    /// Alphabetical by name.
    Name,
    /// Most recently created first.
    Newest,
}

impl TagSort {
    /// Parses a sort key from a query string value.
    ///
    /// Unknown or missing values fall back to usage ordering.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("name") => Self::Name,
            Some("newest") => Self::Newest,
            _ => Self::Usage,
        }
    }
}

/// Parameters for paginated tag list queries.
#[derive(Debug, Clone)]
pub struct ListTagsParams {
    /// Page number (1-indexed).
    pub page: u64,
    /// Number of tags per page.
    pub per_page: u64,
    /// Case-insensitive search over name and description.
    pub search: Option<String>,
    /// Sort order for the result set.
    pub sort: TagSort,
}

/// Converts a tag entity to its DTO.
pub fn to_tag_dto(tag: entity::tag::Model) -> TagDto {
    TagDto {
        id: tag.id,
        name: tag.name,
        description: tag.description,
        color: tag.color,
        usage_count: tag.usage_count,
        created_at: tag.created_at,
    }
}

/// Paginated collection of tags with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTags {
    /// Tags for this page.
    pub tags: Vec<entity::tag::Model>,
    /// Total number of tags matching the query.
    pub total: u64,
    /// Current page number (1-indexed).
    pub page: u64,
    /// Number of tags per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedTags {
    /// Converts the paginated tags to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedTagsDto {
        PaginatedTagsDto {
            tags: self.tags.into_iter().map(to_tag_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
