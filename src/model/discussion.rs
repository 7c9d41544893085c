use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::comment::CommentDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateProConDiscussionDto {
    pub title: String,
    pub content: String,
    /// Stance of the author's initial vote.
    pub is_agree: bool,
}

/// Partial update; only provided fields are written.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateProConDiscussionDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_agree: Option<bool>,
}

/// Full aggregated discussion response: post fields merged with vote tallies,
/// first-voter display names, and the projected comment thread.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProConDiscussionDto {
    pub id: i32,
    pub author: String,
    pub title: String,
    pub content: String,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub agree_count: u64,
    pub disagree_count: u64,
    /// Username of the earliest agree voter, if any.
    pub agree_user: Option<String>,
    pub disagree_user: Option<String>,
    pub comments: Vec<CommentDto>,
}

/// Listing row: the aggregated response without the comment thread.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProConDiscussionListItemDto {
    pub id: i32,
    pub author: String,
    pub title: String,
    pub content: String,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub agree_count: u64,
    pub disagree_count: u64,
    pub agree_user: Option<String>,
    pub disagree_user: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedProConDiscussionsDto {
    pub posts: Vec<ProConDiscussionListItemDto>,
    /// Count of all discussions, unfiltered by pagination.
    pub total_count: u64,
}
