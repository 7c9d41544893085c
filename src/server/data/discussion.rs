//! Pro/con discussion data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    discussion::{CreateProConDiscussionParams, ProConDiscussion},
    post::Post,
};

pub struct ProConDiscussionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProConDiscussionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post, its discussion extension, and the author's initial
    /// vote in one transaction.
    ///
    /// Partial failure rolls the transaction back, leaving no orphan post or
    /// discussion row.
    ///
    /// # Returns
    /// - `Ok((post, discussion))` - Both created rows as domain models
    /// - `Err(DbErr)` - Database error; nothing was written
    pub async fn create_with_initial_vote(
        &self,
        param: CreateProConDiscussionParams,
    ) -> Result<(Post, ProConDiscussion), DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let post = entity::post::ActiveModel {
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            author_id: ActiveValue::Set(param.author_id),
            views: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let discussion = entity::pro_con_discussion::ActiveModel {
            post_id: ActiveValue::Set(post.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::pro_con_vote::ActiveModel {
            discussion_id: ActiveValue::Set(discussion.id),
            user_id: ActiveValue::Set(param.author_id),
            is_agree: ActiveValue::Set(param.is_agree),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok((
            Post::from_entity(post),
            ProConDiscussion::from_entity(discussion),
        ))
    }

    /// Finds the discussion extension attached to a post, if any.
    pub async fn find_by_post_id(
        &self,
        post_id: i32,
    ) -> Result<Option<ProConDiscussion>, DbErr> {
        let entity = entity::prelude::ProConDiscussion::find()
            .filter(entity::pro_con_discussion::Column::PostId.eq(post_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ProConDiscussion::from_entity))
    }

    /// Gets a page of discussions with their posts.
    ///
    /// Ordered by post creation time descending, id descending as
    /// tiebreaker, so limit/offset pagination stays stable.
    pub async fn find_page(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<(ProConDiscussion, Post)>, DbErr> {
        let rows = entity::prelude::ProConDiscussion::find()
            .find_also_related(entity::prelude::Post)
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(discussion, post)| {
                post.map(|p| (ProConDiscussion::from_entity(discussion), Post::from_entity(p)))
            })
            .collect())
    }

    /// Counts all discussions, unfiltered by pagination.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::ProConDiscussion::find().count(self.db).await
    }
}
