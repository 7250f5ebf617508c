use crate::server::{
    data::{question::QuestionRepository, tag::TagRepository},
    error::{auth::AuthError, AppError},
    model::question::{CreateQuestionParams, UpdateQuestionParams},
    service::{question::QuestionService, test::wrap},
};
use test_utils::{builder::TestBuilder, factory};

mod create_question;
mod delete_question;
