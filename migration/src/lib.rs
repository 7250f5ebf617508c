pub use sea_orm_migration::prelude::*;

mod m20260615_000001_create_user_table;
mod m20260615_000002_create_question_table;
mod m20260615_000003_create_answer_table;
mod m20260615_000004_create_tag_table;
mod m20260615_000005_create_question_tag_table;
mod m20260616_000006_create_vote_table;
mod m20260616_000007_create_notification_table;
mod m20260618_000008_add_question_accepted_answer_fk;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260615_000001_create_user_table::Migration),
            Box::new(m20260615_000002_create_question_table::Migration),
            Box::new(m20260615_000003_create_answer_table::Migration),
            Box::new(m20260615_000004_create_tag_table::Migration),
            Box::new(m20260615_000005_create_question_tag_table::Migration),
            Box::new(m20260616_000006_create_vote_table::Migration),
            Box::new(m20260616_000007_create_notification_table::Migration),
            Box::new(m20260618_000008_add_question_accepted_answer_fk::Migration),
        ]
    }
}
