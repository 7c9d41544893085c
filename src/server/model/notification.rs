//! Notification domain model.

use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            content: entity.content,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    /// The owner id is a routing concern, not response data.
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            content: self.content,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}
