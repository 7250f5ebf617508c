use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, ROLE_USER},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod adjust_reputation;
mod create;
mod delete;
