//! Vote data repository for database operations.
//!
//! This module provides the `VoteRepository` for the per-user-per-target vote
//! rows behind the tri-state voting toggle. The repository only moves rows;
//! the toggle semantics, counter deltas, and reputation adjustments live in
//! the vote service, which runs these operations inside one transaction.

use crate::server::model::vote::{VoteCounts, VoteTarget};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for votes.
///
/// Generic over the connection so the same operations run on a pooled
/// connection or inside a transaction handle.
pub struct VoteRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteRepository<'a, C> {
    /// Creates a new VoteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `VoteRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a vote row for one user and target.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created vote
    /// - `Err(DbErr)` - Database error, including unique violation when the
    ///   user already voted on this target
    pub async fn create(
        &self,
        user_id: i32,
        target: VoteTarget,
        target_id: i32,
        vote_type: i32,
    ) -> Result<entity::vote::Model, DbErr> {
        let now = Utc::now();

        entity::vote::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            target_type: ActiveValue::Set(target.as_str().to_string()),
            target_id: ActiveValue::Set(target_id),
            vote_type: ActiveValue::Set(vote_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds one user's vote on one target.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The vote row
    /// - `Ok(None)` - The user has not voted on this target
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_user_and_target(
        &self,
        user_id: i32,
        target: VoteTarget,
        target_id: i32,
    ) -> Result<Option<entity::vote::Model>, DbErr> {
        entity::prelude::Vote::find()
            .filter(entity::vote::Column::UserId.eq(user_id))
            .filter(entity::vote::Column::TargetType.eq(target.as_str()))
            .filter(entity::vote::Column::TargetId.eq(target_id))
            .one(self.db)
            .await
    }

    /// Flips an existing vote row to the opposite direction.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated vote
    /// - `Err(DbErr)` - Database error
    pub async fn update_vote_type(
        &self,
        vote: entity::vote::Model,
        vote_type: i32,
    ) -> Result<entity::vote::Model, DbErr> {
        let mut active_model: entity::vote::ActiveModel = vote.into();
        active_model.vote_type = ActiveValue::Set(vote_type);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes a vote row, cancelling the vote.
    ///
    /// # Returns
    /// - `Ok(())` - Row deleted
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, vote: entity::vote::Model) -> Result<(), DbErr> {
        vote.delete(self.db).await?;
        Ok(())
    }

    /// Tallies the votes referencing one target.
    ///
    /// `total` is the signed sum, the value the target's denormalized
    /// vote_count must equal.
    ///
    /// # Returns
    /// - `Ok(VoteCounts)` - Upvotes, downvotes, and signed total
    /// - `Err(DbErr)` - Database error
    pub async fn count_for_target(
        &self,
        target: VoteTarget,
        target_id: i32,
    ) -> Result<VoteCounts, DbErr> {
        let base = entity::prelude::Vote::find()
            .filter(entity::vote::Column::TargetType.eq(target.as_str()))
            .filter(entity::vote::Column::TargetId.eq(target_id));

        let upvotes = base
            .clone()
            .filter(entity::vote::Column::VoteType.eq(1))
            .count(self.db)
            .await?;
        let downvotes = base
            .filter(entity::vote::Column::VoteType.eq(-1))
            .count(self.db)
            .await?;

        Ok(VoteCounts {
            upvotes,
            downvotes,
            total: upvotes as i64 - downvotes as i64,
        })
    }
}
