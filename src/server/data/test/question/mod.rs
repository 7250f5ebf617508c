use crate::server::{
    data::question::QuestionRepository,
    model::question::{QuestionSort, STATUS_ACTIVE},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod counters;
mod find_by_slug_with_author;
mod list;
mod slug_exists;
