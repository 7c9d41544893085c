//! Pro/con vote data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vote::ProConVote;

pub struct ProConVoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProConVoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts votes of one stance on a discussion.
    pub async fn count_by_stance(
        &self,
        discussion_id: i32,
        is_agree: bool,
    ) -> Result<u64, DbErr> {
        entity::prelude::ProConVote::find()
            .filter(entity::pro_con_vote::Column::DiscussionId.eq(discussion_id))
            .filter(entity::pro_con_vote::Column::IsAgree.eq(is_agree))
            .count(self.db)
            .await
    }

    /// Counts all votes on a discussion regardless of stance.
    pub async fn count_by_discussion(&self, discussion_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ProConVote::find()
            .filter(entity::pro_con_vote::Column::DiscussionId.eq(discussion_id))
            .count(self.db)
            .await
    }

    /// Finds the username of the earliest-created vote of one stance.
    ///
    /// Vote creation time ascending, id ascending as tiebreaker for votes
    /// created in the same instant.
    pub async fn find_first_username_by_stance(
        &self,
        discussion_id: i32,
        is_agree: bool,
    ) -> Result<Option<String>, DbErr> {
        let row = entity::prelude::ProConVote::find()
            .filter(entity::pro_con_vote::Column::DiscussionId.eq(discussion_id))
            .filter(entity::pro_con_vote::Column::IsAgree.eq(is_agree))
            .order_by_asc(entity::pro_con_vote::Column::CreatedAt)
            .order_by_asc(entity::pro_con_vote::Column::Id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(_, user)| user.map(|u| u.username)))
    }

    /// Finds a user's vote on a discussion, if cast.
    pub async fn find_by_discussion_and_user(
        &self,
        discussion_id: i32,
        user_id: i32,
    ) -> Result<Option<ProConVote>, DbErr> {
        let entity = entity::prelude::ProConVote::find()
            .filter(entity::pro_con_vote::Column::DiscussionId.eq(discussion_id))
            .filter(entity::pro_con_vote::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ProConVote::from_entity))
    }

    /// Inserts a fresh vote row.
    ///
    /// Callers must have checked that no `(discussion, user)` row exists;
    /// the unique index rejects duplicates otherwise.
    pub async fn create(
        &self,
        discussion_id: i32,
        user_id: i32,
        is_agree: bool,
    ) -> Result<ProConVote, DbErr> {
        let entity = entity::pro_con_vote::ActiveModel {
            discussion_id: ActiveValue::Set(discussion_id),
            user_id: ActiveValue::Set(user_id),
            is_agree: ActiveValue::Set(is_agree),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ProConVote::from_entity(entity))
    }

    /// Updates the stance of an existing vote row in place.
    ///
    /// The original creation time is kept, so a stance change never alters
    /// first-voter ordering.
    pub async fn set_stance(&self, vote_id: i32, is_agree: bool) -> Result<(), DbErr> {
        entity::prelude::ProConVote::update_many()
            .filter(entity::pro_con_vote::Column::Id.eq(vote_id))
            .col_expr(
                entity::pro_con_vote::Column::IsAgree,
                sea_orm::sea_query::Expr::value(is_agree),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
