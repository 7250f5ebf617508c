use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::AuthorDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAnswerDto {
    pub question_id: i32,
    pub content: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateAnswerDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AnswerDto {
    pub id: i32,
    pub content: String,
    pub question_id: i32,
    pub user_id: i32,
    pub author: Option<AuthorDto>,
    pub is_accepted: bool,
    pub vote_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedAnswersDto {
    pub answers: Vec<AnswerDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
