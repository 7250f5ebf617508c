use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateProfileDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PasswordResetRequestDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PasswordResetDto {
    pub token: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeleteAccountDto {
    pub password: String,
}
