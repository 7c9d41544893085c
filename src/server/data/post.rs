//! Post data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

use crate::server::model::post::{Post, UpdatePostParams};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a post by id.
    pub async fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find_by_id(post_id).one(self.db).await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Applies a partial update to a post.
    ///
    /// Only provided fields are written; `updated_at` is refreshed whenever
    /// at least one field changes.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - The post after the update
    /// - `Ok(None)` - No post with that id
    pub async fn update(
        &self,
        post_id: i32,
        param: UpdatePostParams,
    ) -> Result<Option<Post>, DbErr> {
        let Some(existing) = entity::prelude::Post::find_by_id(post_id).one(self.db).await?
        else {
            return Ok(None);
        };

        if param.is_empty() {
            return Ok(Some(Post::from_entity(existing)));
        }

        let mut active: entity::post::ActiveModel = existing.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = param.content {
            active.content = ActiveValue::Set(content);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Post::from_entity(entity)))
    }

    /// Deletes a post by id. Discussion rows, votes, comments, and reactions
    /// go with it through FK cascades.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows deleted (0 when the post was absent)
    pub async fn delete(&self, post_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Post::delete_by_id(post_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
