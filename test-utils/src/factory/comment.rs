//! Comment factory for creating test comment entities and reactions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test comments with customizable content.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    author_id: i32,
    content: String,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default content.
    pub fn new(db: &'a DatabaseConnection, post_id: i32, author_id: i32) -> Self {
        Self {
            db,
            post_id,
            author_id,
            content: format!("Comment {}", next_id()),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            author_id: ActiveValue::Set(self.author_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default content.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, author_id).build().await
}

/// Inserts a like reaction on a comment.
pub async fn create_like(
    db: &DatabaseConnection,
    comment_id: i32,
    user_id: i32,
) -> Result<entity::comment_like::Model, DbErr> {
    entity::comment_like::ActiveModel {
        comment_id: ActiveValue::Set(comment_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a dislike reaction on a comment.
pub async fn create_dislike(
    db: &DatabaseConnection,
    comment_id: i32,
    user_id: i32,
) -> Result<entity::comment_dislike::Model, DbErr> {
    entity::comment_dislike::ActiveModel {
        comment_id: ActiveValue::Set(comment_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
