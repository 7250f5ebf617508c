use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{answer::AnswerDto, tag::TagDto, user::AuthorDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateQuestionDto {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateQuestionDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Full question payload returned by the detail endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub user_id: i32,
    pub author: Option<AuthorDto>,
    pub view_count: i32,
    pub vote_count: i32,
    pub answer_count: i32,
    pub accepted_answer_id: Option<i32>,
    pub status: String,
    pub tags: Vec<TagDto>,
    pub answers: Vec<AnswerDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trimmed question payload used by list endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuestionListItemDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub user_id: i32,
    pub author: Option<AuthorDto>,
    pub view_count: i32,
    pub vote_count: i32,
    pub answer_count: i32,
    pub accepted_answer_id: Option<i32>,
    pub status: String,
    pub tags: Vec<TagDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedQuestionsDto {
    pub questions: Vec<QuestionListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
