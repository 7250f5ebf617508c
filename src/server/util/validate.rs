//! Field-level request validation.
//!
//! Services collect rule failures into a `Validator` and fail with a single
//! `AppError::Validation` carrying one entry per violated rule, so a request
//! with several bad fields reports all of them at once.

use crate::{model::api::FieldErrorDto, server::error::AppError};

pub const TITLE_MIN: usize = 10;
pub const TITLE_MAX: usize = 255;
pub const BODY_MIN: usize = 20;
pub const BODY_MAX: usize = 10_000;
pub const TAGS_MAX: usize = 5;
pub const TAG_NAME_MIN: usize = 2;
pub const TAG_NAME_MAX: usize = 50;

/// Accumulates field validation failures for one request.
#[derive(Default)]
pub struct Validator {
    errors: Vec<FieldErrorDto>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldErrorDto {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Returns `Ok(())` when no rule failed, otherwise a 400 validation error
    /// listing every failure collected so far.
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }

    pub fn username(&mut self, username: &str) {
        if username.chars().count() < 3 {
            self.push("username", "Username must be at least 3 characters long");
        } else if username.chars().count() > 50 {
            self.push("username", "Username cannot exceed 50 characters");
        }
    }

    pub fn email(&mut self, email: &str) {
        if !is_valid_email(email) {
            self.push("email", "Please enter a valid email address");
        }
    }

    /// Password strength rule shared by registration, password change, and
    /// password reset. `field` distinguishes `password` from `new_password`
    /// in the error payload.
    pub fn password(&mut self, field: &str, password: &str) {
        if password.chars().count() < 8 {
            self.push(field, "Password must be at least 8 characters long");
        } else if password.chars().count() > 100 {
            self.push(field, "Password cannot exceed 100 characters");
        } else if !password.chars().any(|c| c.is_ascii_lowercase())
            || !password.chars().any(|c| c.is_ascii_uppercase())
            || !password.chars().any(|c| c.is_ascii_digit())
        {
            self.push(
                field,
                "Password must contain at least one uppercase letter, one lowercase letter, and one number",
            );
        }
    }

    pub fn question_title(&mut self, title: &str) {
        if title.chars().count() < TITLE_MIN {
            self.push("title", "Title must be at least 10 characters long");
        } else if title.chars().count() > TITLE_MAX {
            self.push("title", "Title cannot exceed 255 characters");
        }
    }

    pub fn question_description(&mut self, description: &str) {
        if description.chars().count() < BODY_MIN {
            self.push(
                "description",
                "Description must be at least 20 characters long",
            );
        } else if description.chars().count() > BODY_MAX {
            self.push("description", "Description cannot exceed 10000 characters");
        }
    }

    pub fn answer_content(&mut self, content: &str) {
        if content.chars().count() < BODY_MIN {
            self.push("content", "Answer must be at least 20 characters long");
        } else if content.chars().count() > BODY_MAX {
            self.push("content", "Answer cannot exceed 10000 characters");
        }
    }

    pub fn question_tags(&mut self, tags: &[String]) {
        if tags.is_empty() {
            self.push("tags", "At least 1 tag is required");
        } else if tags.len() > TAGS_MAX {
            self.push("tags", "Cannot have more than 5 tags");
        } else if tags.iter().any(|t| t.chars().count() > TAG_NAME_MAX) {
            self.push("tags", "Tag name cannot exceed 50 characters");
        }
    }

    pub fn tag_name(&mut self, name: &str) {
        if name.chars().count() < TAG_NAME_MIN {
            self.push("name", "Tag name must be at least 2 characters long");
        } else if name.chars().count() > TAG_NAME_MAX {
            self.push("name", "Tag name cannot exceed 50 characters");
        } else if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            self.push(
                "name",
                "Tag name can only contain letters, numbers, hyphens, underscores, and dots",
            );
        }
    }

    pub fn tag_description(&mut self, description: &str) {
        if description.chars().count() > 500 {
            self.push("description", "Description cannot exceed 500 characters");
        }
    }

    pub fn tag_color(&mut self, color: &str) {
        let valid = color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            self.push(
                "color",
                "Color must be a valid hex color code (e.g., #FF5733)",
            );
        }
    }

    pub fn bio(&mut self, bio: &str) {
        if bio.chars().count() > 500 {
            self.push("bio", "Bio cannot exceed 500 characters");
        }
    }

    pub fn avatar_url(&mut self, url: &str) {
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            self.push("avatar_url", "Avatar URL must be a valid URL");
        }
    }

    pub fn vote_type(&mut self, vote_type: i32) {
        if vote_type != 1 && vote_type != -1 {
            self.push(
                "vote_type",
                "Vote type must be either 1 (upvote) or -1 (downvote)",
            );
        }
    }
}

/// Structural email check: exactly one `@` with a non-empty local part and a
/// dotted, non-empty domain, and no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}
