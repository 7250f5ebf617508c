//! Vote domain models and parameters.
//!
//! Voting is a tri-state toggle per user and target: casting the same direction
//! twice cancels the vote, casting the opposite direction switches it. The types
//! here carry the outcome of that state machine back to the API layer.

use crate::{
    model::vote::{UserVoteDto, VoteCountsDto, VoteResultDto},
    server::error::AppError,
};

/// Reputation delta for the question author per upvote.
pub const QUESTION_UPVOTE_REPUTATION: i32 = 5;
/// Reputation delta for the question author per downvote.
pub const QUESTION_DOWNVOTE_REPUTATION: i32 = -2;
/// Reputation delta for the answer author per upvote.
pub const ANSWER_UPVOTE_REPUTATION: i32 = 10;
/// Reputation delta for the answer author per downvote.
pub const ANSWER_DOWNVOTE_REPUTATION: i32 = -2;

/// Content kind a vote can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTarget {
    Question,
    Answer,
}

impl VoteTarget {
    /// Parses a target type from request input.
    ///
    /// # Returns
    /// - `Ok(VoteTarget)` - Recognized target type
    /// - `Err(AppError::BadRequest)` - Input is neither "question" nor "answer"
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "question" => Ok(Self::Question),
            "answer" => Ok(Self::Answer),
            _ => Err(AppError::BadRequest(
                "Target type must be either \"question\" or \"answer\"".to_string(),
            )),
        }
    }

    /// Storage and wire representation of the target type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }

    /// Reputation delta applied to the target's author for one vote of the
    /// given direction.
    pub fn reputation_for(&self, vote_type: i32) -> i32 {
        match (self, vote_type > 0) {
            (Self::Question, true) => QUESTION_UPVOTE_REPUTATION,
            (Self::Question, false) => QUESTION_DOWNVOTE_REPUTATION,
            (Self::Answer, true) => ANSWER_UPVOTE_REPUTATION,
            (Self::Answer, false) => ANSWER_DOWNVOTE_REPUTATION,
        }
    }
}

/// Parameters for casting a vote.
#[derive(Debug, Clone)]
pub struct CastVoteParams {
    /// ID of the voting user.
    pub user_id: i32,
    /// Kind of content receiving the vote.
    pub target: VoteTarget,
    /// ID of the question or answer receiving the vote.
    pub target_id: i32,
    /// Vote direction, +1 or -1.
    pub vote_type: i32,
}

/// Aggregated vote tallies for one target.
///
/// `total` is the signed sum of vote directions, which is also the value the
/// target's denormalized vote_count must equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteCounts {
    pub upvotes: u64,
    pub downvotes: u64,
    pub total: i64,
}

impl VoteCounts {
    pub fn into_dto(self) -> VoteCountsDto {
        VoteCountsDto {
            upvotes: self.upvotes,
            downvotes: self.downvotes,
            total: self.total,
        }
    }
}

/// Outcome of a cast or remove operation.
///
/// `vote_type` is the caller's vote after the operation, 0 when the vote was
/// cancelled or removed. `previous_vote_type` is what it replaced, 0 when
/// there was no prior vote.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteOutcome {
    pub target: VoteTarget,
    pub target_id: i32,
    pub vote_type: i32,
    pub previous_vote_type: i32,
    pub counts: VoteCounts,
}

impl VoteOutcome {
    pub fn into_dto(self) -> VoteResultDto {
        VoteResultDto {
            target_type: self.target.as_str().to_string(),
            target_id: self.target_id,
            vote_type: self.vote_type,
            previous_vote_type: self.previous_vote_type,
            vote_count: self.counts.into_dto(),
        }
    }
}

/// The caller's current vote on a target alongside the target's tallies.
#[derive(Debug, Clone, PartialEq)]
pub struct UserVote {
    pub target: VoteTarget,
    pub target_id: i32,
    /// 0 when the user has not voted on this target.
    pub vote_type: i32,
    pub counts: VoteCounts,
}

impl UserVote {
    pub fn into_dto(self) -> UserVoteDto {
        UserVoteDto {
            target_type: self.target.as_str().to_string(),
            target_id: self.target_id,
            vote_type: self.vote_type,
            vote_count: self.counts.into_dto(),
        }
    }
}
