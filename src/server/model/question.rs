//! Question domain models and parameters.
//!
//! Provides parameter types for question creation, updates, and list queries along
//! with composite models joining questions to their authors and tags. Conversion to
//! DTOs happens here so controllers stay thin.

use crate::{
    model::question::{PaginatedQuestionsDto, QuestionDto, QuestionListItemDto},
    server::model::{answer::AnswerWithAuthor, tag::to_tag_dto, user::to_author_dto},
};

/// Question open for new answers.
pub const STATUS_ACTIVE: &str = "active";
/// Question closed to new answers by a moderator.
pub const STATUS_CLOSED: &str = "closed";
/// Question soft-removed from listings.
pub const STATUS_DELETED: &str = "deleted";

/// Parameters for creating a new question.
#[derive(Debug, Clone)]
pub struct CreateQuestionParams {
    /// ID of the authoring user.
    pub user_id: i32,
    /// Question title, also the source of the slug.
    pub title: String,
    /// Question body.
    pub description: String,
    /// Tag names to associate with the question.
    pub tags: Vec<String>,
}

/// Parameters for updating an existing question.
///
/// All fields are optional - only provided fields will be updated. A new title
/// regenerates the slug. The tags list, if provided, completely replaces the
/// question's tag associations.
#[derive(Debug, Clone, Default)]
pub struct UpdateQuestionParams {
    /// New question title.
    pub title: Option<String>,
    /// New question body.
    pub description: Option<String>,
    /// New tag names (replaces all existing associations if provided).
    pub tags: Option<Vec<String>>,
}

/// Sort orders accepted by the question list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSort {
    /// Most recently created first.
    Newest,
    /// Highest vote count first.
    Votes,
    /// Most answered first.
    Answers,
    /// Most viewed first.
    Views,
}

impl QuestionSort {
    /// Parses a sort key from a query string value.
    ///
    /// Unknown or missing values fall back to newest-first, matching the
    /// default ordering of the question list.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("votes") => Self::Votes,
            Some("answers") => Self::Answers,
            Some("views") => Self::Views,
            _ => Self::Newest,
        }
    }
}

/// Parameters for paginated question list queries.
#[derive(Debug, Clone)]
pub struct ListQuestionsParams {
    /// Page number (1-indexed).
    pub page: u64,
    /// Number of questions per page.
    pub per_page: u64,
    /// Case-insensitive search over title and description.
    pub search: Option<String>,
    /// Restrict to questions carrying this tag name.
    pub tag: Option<String>,
    /// Restrict to questions authored by this user.
    pub user_id: Option<i32>,
    /// Sort order for the result set.
    pub sort: QuestionSort,
}

/// Question joined with its author and tags for list responses.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionWithAuthor {
    pub question: entity::question::Model,
    /// Author row, absent when the account has been deleted.
    pub author: Option<entity::user::Model>,
    pub tags: Vec<entity::tag::Model>,
}

impl QuestionWithAuthor {
    /// Converts to the trimmed list-item DTO used by list endpoints.
    pub fn into_list_item_dto(self) -> QuestionListItemDto {
        QuestionListItemDto {
            id: self.question.id,
            title: self.question.title,
            description: self.question.description,
            slug: self.question.slug,
            user_id: self.question.user_id,
            author: self.author.map(to_author_dto),
            view_count: self.question.view_count,
            vote_count: self.question.vote_count,
            answer_count: self.question.answer_count,
            accepted_answer_id: self.question.accepted_answer_id,
            status: self.question.status,
            tags: self.tags.into_iter().map(to_tag_dto).collect(),
            created_at: self.question.created_at,
        }
    }
}

/// Question joined with its author, tags, and answers for detail responses.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDetail {
    pub question: entity::question::Model,
    pub author: Option<entity::user::Model>,
    pub tags: Vec<entity::tag::Model>,
    pub answers: Vec<AnswerWithAuthor>,
}

impl QuestionDetail {
    /// Converts to the full question DTO returned by the detail endpoints.
    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.question.id,
            title: self.question.title,
            description: self.question.description,
            slug: self.question.slug,
            user_id: self.question.user_id,
            author: self.author.map(to_author_dto),
            view_count: self.question.view_count,
            vote_count: self.question.vote_count,
            answer_count: self.question.answer_count,
            accepted_answer_id: self.question.accepted_answer_id,
            status: self.question.status,
            tags: self.tags.into_iter().map(to_tag_dto).collect(),
            answers: self.answers.into_iter().map(|a| a.into_dto()).collect(),
            created_at: self.question.created_at,
            updated_at: self.question.updated_at,
        }
    }
}

/// Paginated collection of questions with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedQuestions {
    /// Questions for this page.
    pub questions: Vec<QuestionWithAuthor>,
    /// Total number of questions matching the query.
    pub total: u64,
    /// Current page number (1-indexed).
    pub page: u64,
    /// Number of questions per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedQuestions {
    /// Converts the paginated questions to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedQuestionsDto {
        PaginatedQuestionsDto {
            questions: self
                .questions
                .into_iter()
                .map(|q| q.into_list_item_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
