use sea_orm_migration::{prelude::*, schema::*};

use super::m20260615_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // AcceptedAnswerId gets its foreign key in a later migration, once
        // the answers table exists.
        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(pk_auto(Question::Id))
                    .col(string(Question::Title))
                    .col(text(Question::Description))
                    .col(string_uniq(Question::Slug))
                    .col(integer(Question::UserId))
                    .col(integer(Question::ViewCount).default(0))
                    .col(integer(Question::VoteCount).default(0))
                    .col(integer(Question::AnswerCount).default(0))
                    .col(integer_null(Question::AcceptedAnswerId))
                    .col(string(Question::Status).default("active"))
                    .col(
                        timestamp_with_time_zone(Question::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Question::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_user_id")
                            .from(Question::Table, Question::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_question_user_id")
                    .table(Question::Table)
                    .col(Question::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_question_user_id")
                    .table(Question::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Question::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Question {
    Table,
    Id,
    Title,
    Description,
    Slug,
    UserId,
    ViewCount,
    VoteCount,
    AnswerCount,
    AcceptedAnswerId,
    Status,
    CreatedAt,
    UpdatedAt,
}
