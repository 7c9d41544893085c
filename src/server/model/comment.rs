//! Comment domain model and the viewer-aware projection.

use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            author_id: entity.author_id,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Comment enriched with its author's username and the full reaction
/// collections, as assembled by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithReactions {
    pub id: i32,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// User ids present in the like collection.
    pub likes: Vec<i32>,
    /// User ids present in the dislike collection.
    pub dislikes: Vec<i32>,
}

/// Projects a comment for a viewer.
///
/// Counts come from their own collections: `like` from the like rows and
/// `dislike` from the dislike rows, consistent with the membership booleans.
/// An anonymous viewer reports both booleans false.
pub fn project_comment(comment: &CommentWithReactions, viewer_id: Option<i32>) -> CommentDto {
    CommentDto {
        id: comment.id,
        author: comment.author.clone(),
        content: comment.content.clone(),
        like: comment.likes.len() as u64,
        dislike: comment.dislikes.len() as u64,
        created_at: comment.created_at,
        updated_at: comment.updated_at,
        liked_by_user: viewer_id.is_some_and(|id| comment.likes.contains(&id)),
        disliked_by_user: viewer_id.is_some_and(|id| comment.dislikes.contains(&id)),
    }
}
