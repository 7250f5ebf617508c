use crate::server::{
    data::{question::QuestionRepository, user::UserRepository, vote::VoteRepository},
    error::AppError,
    model::vote::{CastVoteParams, VoteTarget},
    service::{test::wrap, vote::VoteService},
};
use test_utils::{builder::TestBuilder, factory};

mod cast_vote;
mod remove_vote;
mod toggle;
