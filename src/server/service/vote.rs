//! Vote service for business logic.
//!
//! This module implements the tri-state voting toggle and everything that has
//! to move with it: the target's denormalized vote_count, the author's
//! reputation, and the upvote notification. Every mutation runs inside one
//! transaction so a failure at any step leaves no partial state behind.
//!
//! Toggle semantics per user and target: no prior vote → insert; prior vote
//! in the same direction → cancel; prior vote in the opposite direction →
//! switch. The applied counter delta is always `new − old` with a missing
//! vote counting as 0, and reputation reverses the old vote's contribution
//! before applying the new one.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        answer::AnswerRepository, notification::NotificationRepository,
        question::QuestionRepository, user::UserRepository, vote::VoteRepository,
    },
    db::Db,
    error::AppError,
    model::{
        notification::{excerpt, CreateNotificationParams, TYPE_VOTE},
        vote::{CastVoteParams, UserVote, VoteCounts, VoteOutcome, VoteTarget},
    },
    util::validate::Validator,
};

/// Vote target resolved to the facts the toggle needs.
struct TargetInfo {
    author_id: i32,
    /// Question title or answer content, used for the notification message.
    summary: String,
}

/// Service providing business logic for voting.
pub struct VoteService<'a> {
    pub db: &'a Db,
}

impl<'a> VoteService<'a> {
    /// Creates a new VoteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database handle
    ///
    /// # Returns
    /// - `VoteService` - New service instance
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Casts, switches, or cancels a vote.
    ///
    /// Runs the toggle, the target's vote_count delta, the author's
    /// reputation adjustment, and the upvote notification in one
    /// transaction. Only a vote that ends up as a new upvote (fresh insert
    /// or a switch from a downvote) notifies the author; cancellations and
    /// downvotes never do.
    ///
    /// # Arguments
    /// - `params` - Voter, target, and vote direction
    ///
    /// # Returns
    /// - `Ok(VoteOutcome)` - Resulting vote state and fresh tallies
    /// - `Err(AppError::Validation)` - vote_type outside {1, -1}
    /// - `Err(AppError::NotFound)` - Target does not exist
    /// - `Err(AppError::BadRequest)` - Voter owns the target
    /// - `Err(AppError::Conflict)` - Concurrent duplicate vote insert
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn cast_vote(&self, params: CastVoteParams) -> Result<VoteOutcome, AppError> {
        let mut validator = Validator::new();
        validator.vote_type(params.vote_type);
        validator.finish()?;

        let target_info =
            load_target(self.db.connection(), params.target, params.target_id).await?;

        if target_info.author_id == params.user_id {
            return Err(AppError::BadRequest(
                "You cannot vote on your own content".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let vote_repo = VoteRepository::new(&txn);
        let existing = vote_repo
            .find_by_user_and_target(params.user_id, params.target, params.target_id)
            .await?;

        // (resulting vote, previous vote, counter delta)
        let (new_vote, old_vote, delta) = match existing {
            None => {
                vote_repo
                    .create(
                        params.user_id,
                        params.target,
                        params.target_id,
                        params.vote_type,
                    )
                    .await
                    .map_err(|err| match err.sql_err() {
                        Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                            AppError::Conflict(
                                "You have already voted on this content".to_string(),
                            )
                        }
                        _ => err.into(),
                    })?;
                (params.vote_type, 0, params.vote_type)
            }
            Some(vote) if vote.vote_type == params.vote_type => {
                let old = vote.vote_type;
                vote_repo.delete(vote).await?;
                (0, old, -old)
            }
            Some(vote) => {
                let old = vote.vote_type;
                vote_repo.update_vote_type(vote, params.vote_type).await?;
                (params.vote_type, old, params.vote_type - old)
            }
        };

        apply_vote_delta(&txn, params.target, params.target_id, delta).await?;

        // Reverse the old vote's reputation contribution, apply the new one.
        let mut reputation_delta = 0;
        if old_vote != 0 {
            reputation_delta -= params.target.reputation_for(old_vote);
        }
        if new_vote != 0 {
            reputation_delta += params.target.reputation_for(new_vote);
        }
        if reputation_delta != 0 {
            UserRepository::new(&txn)
                .adjust_reputation(target_info.author_id, reputation_delta)
                .await?;
        }

        // Only a vote that lands as a fresh upvote notifies the author.
        if new_vote == 1 && old_vote != 1 && target_info.author_id != params.user_id {
            notify_upvote(&txn, &target_info, &params).await?;
        }

        let counts = VoteRepository::new(&txn)
            .count_for_target(params.target, params.target_id)
            .await?;

        txn.commit().await?;

        Ok(VoteOutcome {
            target: params.target,
            target_id: params.target_id,
            vote_type: new_vote,
            previous_vote_type: old_vote,
            counts,
        })
    }

    /// Removes the caller's vote from a target explicitly.
    ///
    /// Unlike the cancel arm of `cast_vote`, this fails when no vote exists
    /// instead of creating one.
    ///
    /// # Returns
    /// - `Ok(VoteOutcome)` - Vote removed, tallies refreshed
    /// - `Err(AppError::NotFound)` - Target or vote does not exist
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn remove_vote(
        &self,
        user_id: i32,
        target: VoteTarget,
        target_id: i32,
    ) -> Result<VoteOutcome, AppError> {
        let target_info = load_target(self.db.connection(), target, target_id).await?;

        let txn = self.db.begin().await?;

        let vote_repo = VoteRepository::new(&txn);
        let Some(vote) = vote_repo
            .find_by_user_and_target(user_id, target, target_id)
            .await?
        else {
            return Err(AppError::NotFound("Vote not found".to_string()));
        };

        let old_vote = vote.vote_type;
        vote_repo.delete(vote).await?;

        apply_vote_delta(&txn, target, target_id, -old_vote).await?;

        UserRepository::new(&txn)
            .adjust_reputation(target_info.author_id, -target.reputation_for(old_vote))
            .await?;

        let counts = VoteRepository::new(&txn)
            .count_for_target(target, target_id)
            .await?;

        txn.commit().await?;

        Ok(VoteOutcome {
            target,
            target_id,
            vote_type: 0,
            previous_vote_type: old_vote,
            counts,
        })
    }

    /// Gets the caller's current vote on a target alongside its tallies.
    ///
    /// # Returns
    /// - `Ok(UserVote)` - vote_type is 0 when the user has not voted
    /// - `Err(AppError::NotFound)` - Target does not exist
    /// - `Err(AppError)` - Database error
    pub async fn get_user_vote(
        &self,
        user_id: i32,
        target: VoteTarget,
        target_id: i32,
    ) -> Result<UserVote, AppError> {
        load_target(self.db.connection(), target, target_id).await?;

        let vote_repo = VoteRepository::new(self.db.connection());
        let vote_type = vote_repo
            .find_by_user_and_target(user_id, target, target_id)
            .await?
            .map(|vote| vote.vote_type)
            .unwrap_or(0);
        let counts = vote_repo.count_for_target(target, target_id).await?;

        Ok(UserVote {
            target,
            target_id,
            vote_type,
            counts,
        })
    }

    /// Tallies the votes on a target.
    ///
    /// # Returns
    /// - `Ok(VoteCounts)` - Upvotes, downvotes, and signed total
    /// - `Err(AppError::NotFound)` - Target does not exist
    /// - `Err(AppError)` - Database error
    pub async fn count_votes(
        &self,
        target: VoteTarget,
        target_id: i32,
    ) -> Result<VoteCounts, AppError> {
        load_target(self.db.connection(), target, target_id).await?;

        Ok(VoteRepository::new(self.db.connection())
            .count_for_target(target, target_id)
            .await?)
    }
}

/// Resolves a vote target to its author and a human-readable summary.
async fn load_target<C: ConnectionTrait>(
    db: &C,
    target: VoteTarget,
    target_id: i32,
) -> Result<TargetInfo, AppError> {
    match target {
        VoteTarget::Question => {
            let question = QuestionRepository::new(db)
                .find_by_id(target_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

            Ok(TargetInfo {
                author_id: question.user_id,
                summary: question.title,
            })
        }
        VoteTarget::Answer => {
            let answer = AnswerRepository::new(db)
                .find_by_id(target_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

            Ok(TargetInfo {
                author_id: answer.user_id,
                summary: answer.content,
            })
        }
    }
}

/// Applies a signed delta to the denormalized vote_count of the target row.
async fn apply_vote_delta<C: ConnectionTrait>(
    db: &C,
    target: VoteTarget,
    target_id: i32,
    delta: i32,
) -> Result<(), AppError> {
    match target {
        VoteTarget::Question => {
            QuestionRepository::new(db)
                .apply_vote_delta(target_id, delta)
                .await?
        }
        VoteTarget::Answer => {
            AnswerRepository::new(db)
                .apply_vote_delta(target_id, delta)
                .await?
        }
    }

    Ok(())
}

/// Creates the upvote notification for the target's author.
async fn notify_upvote<C: ConnectionTrait>(
    db: &C,
    target_info: &TargetInfo,
    params: &CastVoteParams,
) -> Result<(), AppError> {
    let voter = UserRepository::new(db)
        .find_by_id(params.user_id)
        .await?
        .map(|user| user.username)
        .unwrap_or_else(|| "Someone".to_string());

    let target_name = match params.target {
        VoteTarget::Question => "question",
        VoteTarget::Answer => "answer",
    };

    NotificationRepository::new(db)
        .create(CreateNotificationParams {
            user_id: target_info.author_id,
            kind: TYPE_VOTE,
            title: "Your content received an upvote".to_string(),
            message: format!(
                "{} upvoted your {}: \"{}\"",
                voter,
                target_name,
                excerpt(&target_info.summary)
            ),
            reference_type: Some(params.target.as_str().to_string()),
            reference_id: Some(params.target_id),
        })
        .await?;

    Ok(())
}
