use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CastVoteDto {
    pub target_type: String,
    pub target_id: i32,
    pub vote_type: i32,
}

/// Outcome of casting or removing a vote. `vote_type` is the caller's vote
/// after the operation, 0 when it was cancelled.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoteResultDto {
    pub target_type: String,
    pub target_id: i32,
    pub vote_type: i32,
    pub previous_vote_type: i32,
    pub vote_count: VoteCountsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserVoteDto {
    pub target_type: String,
    pub target_id: i32,
    pub vote_type: i32,
    pub vote_count: VoteCountsDto,
}

/// `total` is the signed sum, not the number of votes.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoteCountsDto {
    pub upvotes: u64,
    pub downvotes: u64,
    pub total: i64,
}
