use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full profile for the authenticated user. Never carries the password hash.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
    pub reputation: i32,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reduced author block embedded in question and answer payloads.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuthorDto {
    pub id: i32,
    pub username: String,
    pub reputation: i32,
    pub avatar_url: Option<String>,
}
