//! Vote factory for creating test pro/con vote entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test votes with customizable stance and timing.
pub struct VoteFactory<'a> {
    db: &'a DatabaseConnection,
    discussion_id: i32,
    user_id: i32,
    is_agree: bool,
    created_at: DateTime<Utc>,
}

impl<'a> VoteFactory<'a> {
    /// Creates a new VoteFactory defaulting to an agree vote cast now.
    pub fn new(db: &'a DatabaseConnection, discussion_id: i32, user_id: i32) -> Self {
        Self {
            db,
            discussion_id,
            user_id,
            is_agree: true,
            created_at: Utc::now(),
        }
    }

    pub fn is_agree(mut self, is_agree: bool) -> Self {
        self.is_agree = is_agree;
        self
    }

    /// Sets the creation time; useful for pinning first-voter ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the vote entity into the database.
    pub async fn build(self) -> Result<entity::pro_con_vote::Model, DbErr> {
        entity::pro_con_vote::ActiveModel {
            discussion_id: ActiveValue::Set(self.discussion_id),
            user_id: ActiveValue::Set(self.user_id),
            is_agree: ActiveValue::Set(self.is_agree),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
