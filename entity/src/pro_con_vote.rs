use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// One stance per (discussion, user); stance changes update the row in place.
/// The pair is unique-indexed in the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pro_con_vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub discussion_id: i32,
    pub user_id: i32,
    pub is_agree: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pro_con_discussion::Entity",
        from = "Column::DiscussionId",
        to = "super::pro_con_discussion::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ProConDiscussion,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::pro_con_discussion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProConDiscussion.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
