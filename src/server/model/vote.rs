//! Pro/con vote domain model.

use chrono::{DateTime, Utc};

/// One stance per (discussion, user).
#[derive(Debug, Clone, PartialEq)]
pub struct ProConVote {
    pub id: i32,
    pub discussion_id: i32,
    pub user_id: i32,
    pub is_agree: bool,
    pub created_at: DateTime<Utc>,
}

impl ProConVote {
    pub fn from_entity(entity: entity::pro_con_vote::Model) -> Self {
        Self {
            id: entity.id,
            discussion_id: entity.discussion_id,
            user_id: entity.user_id,
            is_agree: entity.is_agree,
            created_at: entity.created_at,
        }
    }
}
