use sea_orm_migration::{prelude::*, schema::*};

use super::m20260615_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // TargetId is polymorphic over questions and answers, so it carries
        // no foreign key; dangling rows are prevented by the cascade cleanup
        // in the services that delete targets.
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(pk_auto(Vote::Id))
                    .col(integer(Vote::UserId))
                    .col(string(Vote::TargetType))
                    .col(integer(Vote::TargetId))
                    .col(integer(Vote::VoteType))
                    .col(
                        timestamp_with_time_zone(Vote::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Vote::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_user_id")
                            .from(Vote::Table, Vote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_vote_user_target_unique")
                            .col(Vote::UserId)
                            .col(Vote::TargetType)
                            .col(Vote::TargetId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vote_target")
                    .table(Vote::Table)
                    .col(Vote::TargetType)
                    .col(Vote::TargetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_vote_target")
                    .table(Vote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vote {
    Table,
    Id,
    UserId,
    TargetType,
    TargetId,
    VoteType,
    CreatedAt,
    UpdatedAt,
}
