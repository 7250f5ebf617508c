use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260615_000001_create_user_table::User,
    m20260615_000002_create_question_table::Question,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Answer::Table)
                    .if_not_exists()
                    .col(pk_auto(Answer::Id))
                    .col(text(Answer::Content))
                    .col(integer(Answer::QuestionId))
                    .col(integer(Answer::UserId))
                    .col(boolean(Answer::IsAccepted).default(false))
                    .col(integer(Answer::VoteCount).default(0))
                    .col(
                        timestamp_with_time_zone(Answer::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Answer::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_question_id")
                            .from(Answer::Table, Answer::QuestionId)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_user_id")
                            .from(Answer::Table, Answer::UserId)
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
                    .name("idx_answer_question_id")
                    .table(Answer::Table)
                    .col(Answer::QuestionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_answer_question_id")
                    .table(Answer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Answer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Answer {
    Table,
    Id,
    Content,
    QuestionId,
    UserId,
    IsAccepted,
    VoteCount,
    CreatedAt,
    UpdatedAt,
}
