//! Post factory for creating test post entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test posts with customizable fields.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    content: String,
    author_id: i32,
    views: i32,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {id}"` where id is auto-incremented
    /// - content: `"Content of post {id}"`
    /// - views: `0`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `author_id` - Id of an existing user to own the post
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Post {}", id),
            content: format!("Content of post {}", id),
            author_id,
            views: 0,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.views = views;
        self
    }

    /// Sets the creation time; useful for pinning listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id),
            views: ActiveValue::Set(self.views),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
