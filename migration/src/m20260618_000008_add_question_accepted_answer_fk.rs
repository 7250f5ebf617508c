use sea_orm_migration::prelude::*;

use super::{
    m20260615_000002_create_question_table::Question,
    m20260615_000003_create_answer_table::Answer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Questions and answers reference each other, so this foreign key
        // could not be part of the questions create-table migration.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_question_accepted_answer_id")
                    .from(Question::Table, Question::AcceptedAnswerId)
                    .to(Answer::Table, Answer::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_question_accepted_answer_id")
                    .table(Question::Table)
                    .to_owned(),
            )
            .await
    }
}
