use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260615_000002_create_question_table::Question,
    m20260615_000004_create_tag_table::Tag,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuestionTag::Table)
                    .if_not_exists()
                    .col(integer(QuestionTag::QuestionId))
                    .col(integer(QuestionTag::TagId))
                    .col(
                        timestamp_with_time_zone(QuestionTag::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(QuestionTag::QuestionId)
                            .col(QuestionTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_tag_question_id")
                            .from(QuestionTag::Table, QuestionTag::QuestionId)
                            .to(Question::Table, Question::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_tag_tag_id")
                            .from(QuestionTag::Table, QuestionTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuestionTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum QuestionTag {
    Table,
    QuestionId,
    TagId,
    CreatedAt,
}
