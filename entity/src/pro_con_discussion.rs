use sea_orm::entity::prelude::*;

/// Pro/con extension of a post, one row per debate thread.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pro_con_discussion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub post_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
    #[sea_orm(has_many = "super::pro_con_vote::Entity")]
    ProConVote,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::pro_con_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProConVote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
