//! Comment data repository, including reaction rows.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CommentWithReactions};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment on a post.
    pub async fn create(
        &self,
        post_id: i32,
        author_id: i32,
        content: String,
    ) -> Result<Comment, DbErr> {
        let now = Utc::now();

        let entity = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            author_id: ActiveValue::Set(author_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Finds a comment by id.
    pub async fn find_by_id(&self, comment_id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Gets a post's comments in creation order, each enriched with the
    /// author's username and the full like/dislike collections.
    ///
    /// Three queries: comments joined with authors, then the like rows and
    /// dislike rows for the whole page, grouped per comment in memory.
    pub async fn find_by_post_with_reactions(
        &self,
        post_id: i32,
    ) -> Result<Vec<CommentWithReactions>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let comment_ids: Vec<i32> = comments.iter().map(|(c, _)| c.id).collect();

        let mut likes_by_comment: HashMap<i32, Vec<i32>> = HashMap::new();
        let mut dislikes_by_comment: HashMap<i32, Vec<i32>> = HashMap::new();

        if !comment_ids.is_empty() {
            let likes = entity::prelude::CommentLike::find()
                .filter(entity::comment_like::Column::CommentId.is_in(comment_ids.clone()))
                .all(self.db)
                .await?;
            for like in likes {
                likes_by_comment
                    .entry(like.comment_id)
                    .or_default()
                    .push(like.user_id);
            }

            let dislikes = entity::prelude::CommentDislike::find()
                .filter(entity::comment_dislike::Column::CommentId.is_in(comment_ids))
                .all(self.db)
                .await?;
            for dislike in dislikes {
                dislikes_by_comment
                    .entry(dislike.comment_id)
                    .or_default()
                    .push(dislike.user_id);
            }
        }

        comments
            .into_iter()
            .map(|(comment, author)| {
                let author = author.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Author {} of comment {} not found",
                        comment.author_id, comment.id
                    ))
                })?;

                Ok(CommentWithReactions {
                    id: comment.id,
                    author: author.username,
                    content: comment.content,
                    created_at: comment.created_at,
                    updated_at: comment.updated_at,
                    likes: likes_by_comment.remove(&comment.id).unwrap_or_default(),
                    dislikes: dislikes_by_comment.remove(&comment.id).unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Finds a user's like on a comment, if present.
    pub async fn find_like(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::comment_like::Model>, DbErr> {
        entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.eq(comment_id))
            .filter(entity::comment_like::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Inserts a like row. The unique index rejects a second like by the
    /// same user.
    pub async fn create_like(&self, comment_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::comment_like::ActiveModel {
            comment_id: ActiveValue::Set(comment_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    /// Deletes a like row by id.
    pub async fn delete_like(&self, like_id: i32) -> Result<(), DbErr> {
        entity::prelude::CommentLike::delete_by_id(like_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Finds a user's dislike on a comment, if present.
    pub async fn find_dislike(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::comment_dislike::Model>, DbErr> {
        entity::prelude::CommentDislike::find()
            .filter(entity::comment_dislike::Column::CommentId.eq(comment_id))
            .filter(entity::comment_dislike::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Inserts a dislike row. The unique index rejects a second dislike by
    /// the same user.
    pub async fn create_dislike(&self, comment_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::comment_dislike::ActiveModel {
            comment_id: ActiveValue::Set(comment_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    /// Deletes a dislike row by id.
    pub async fn delete_dislike(&self, dislike_id: i32) -> Result<(), DbErr> {
        entity::prelude::CommentDislike::delete_by_id(dislike_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
