use sea_orm_migration::{prelude::*, schema::*};

use super::m20260615_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(integer(Notification::UserId))
                    .col(string(Notification::Type))
                    .col(string(Notification::Title))
                    .col(text(Notification::Message))
                    .col(string_null(Notification::ReferenceType))
                    .col(integer_null(Notification::ReferenceId))
                    .col(boolean(Notification::IsRead).default(false))
                    .col(
                        timestamp_with_time_zone(Notification::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_user_id")
                            .from(Notification::Table, Notification::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unread lookups and newest-first listings are the hot paths.
        manager
            .create_index(
                Index::create()
                    .name("idx_notification_user_id_is_read")
                    .table(Notification::Table)
                    .col(Notification::UserId)
                    .col(Notification::IsRead)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_created_at")
                    .table(Notification::Table)
                    .col(Notification::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_notification_created_at")
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_notification_user_id_is_read")
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
    UserId,
    Type,
    Title,
    Message,
    ReferenceType,
    ReferenceId,
    IsRead,
    CreatedAt,
}
