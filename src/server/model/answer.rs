//! Answer domain models and parameters.

use crate::{
    model::answer::{AnswerDto, PaginatedAnswersDto},
    server::model::user::to_author_dto,
};

/// Parameters for creating a new answer.
#[derive(Debug, Clone)]
pub struct CreateAnswerParams {
    /// ID of the question being answered.
    pub question_id: i32,
    /// ID of the authoring user.
    pub user_id: i32,
    /// Answer body.
    pub content: String,
}

/// Sort orders accepted by the per-question answer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSort {
    /// Accepted answer first, then by vote count, oldest breaking ties.
    Votes,
    /// Most recently posted first.
    Newest,
    /// Oldest first.
    Oldest,
}

impl AnswerSort {
    /// Parses a sort key from a query string value.
    ///
    /// Unknown or missing values fall back to vote ordering, which keeps the
    /// accepted answer pinned to the top.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("newest") => Self::Newest,
            Some("oldest") => Self::Oldest,
            _ => Self::Votes,
        }
    }
}

/// Answer joined with its author for API responses.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerWithAuthor {
    pub answer: entity::answer::Model,
    /// Author row, absent when the account has been deleted.
    pub author: Option<entity::user::Model>,
}

impl AnswerWithAuthor {
    /// Converts to the answer DTO embedded in question details and answer lists.
    pub fn into_dto(self) -> AnswerDto {
        AnswerDto {
            id: self.answer.id,
            content: self.answer.content,
            question_id: self.answer.question_id,
            user_id: self.answer.user_id,
            author: self.author.map(to_author_dto),
            is_accepted: self.answer.is_accepted,
            vote_count: self.answer.vote_count,
            created_at: self.answer.created_at,
            updated_at: self.answer.updated_at,
        }
    }
}

/// Paginated collection of answers with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAnswers {
    /// Answers for this page.
    pub answers: Vec<AnswerWithAuthor>,
    /// Total number of answers for the question.
    pub total: u64,
    /// Current page number (1-indexed).
    pub page: u64,
    /// Number of answers per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedAnswers {
    /// Converts the paginated answers to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedAnswersDto {
        PaginatedAnswersDto {
            answers: self.answers.into_iter().map(|a| a.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
