//! SeaORM Entity for questions table

use sea_orm::entity::prelude::*;

/// The foreign key from `accepted_answer_id` to the answers table is added
/// by a follow-up migration rather than declared here, so table creation
/// stays acyclic and test schemas derived from this entity work on SQLite.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub user_id: i32,
    pub view_count: i32,
    pub vote_count: i32,
    pub answer_count: i32,
    pub accepted_answer_id: Option<i32>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::answer::Entity")]
    Answer,
    #[sea_orm(has_many = "super::question_tag::Entity")]
    QuestionTag,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answer.def()
    }
}

impl Related<super::question_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::question_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::question_tag::Relation::Question.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
