use crate::server::{
    data::answer::AnswerRepository,
    model::answer::{AnswerSort, CreateAnswerParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod accepted_flag;
mod create;
