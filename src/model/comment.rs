use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
}

/// Viewer-aware projection of a comment with its reaction counts.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub author: String,
    pub content: String,
    pub like: u64,
    pub dislike: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Whether the requesting viewer is in the like collection. Always false
    /// for anonymous viewers.
    pub liked_by_user: bool,
    pub disliked_by_user: bool,
}
