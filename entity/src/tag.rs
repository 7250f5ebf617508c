//! SeaORM Entity for tags table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub color: String,
    pub usage_count: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::question_tag::Entity")]
    QuestionTag,
}

impl Related<super::question_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionTag.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        super::question_tag::Relation::Question.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::question_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
