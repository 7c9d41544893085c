//! Discussion domain model and the response aggregation.
//!
//! The aggregation is a pure merge over plain structs: repositories fetch the
//! pieces (post, author name, vote summary, projected comments) and the
//! functions here shape them into response DTOs. How the pieces were fetched
//! is invisible at this layer.

use crate::model::{
    comment::CommentDto,
    discussion::{ProConDiscussionDto, ProConDiscussionListItemDto},
};
use crate::server::model::post::Post;

/// Pro/con extension row of a post.
#[derive(Debug, Clone, PartialEq)]
pub struct ProConDiscussion {
    pub id: i32,
    pub post_id: i32,
}

impl ProConDiscussion {
    pub fn from_entity(entity: entity::pro_con_discussion::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
        }
    }
}

/// Parameters for creating a discussion with its author's initial vote.
#[derive(Debug, Clone)]
pub struct CreateProConDiscussionParams {
    pub title: String,
    pub content: String,
    pub author_id: i32,
    pub is_agree: bool,
}

/// Parameters for a partial discussion update.
///
/// A present `is_agree` is delegated to the vote tally as an upsert before
/// any post field is written.
#[derive(Debug, Clone, Default)]
pub struct UpdateProConDiscussionParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_agree: Option<bool>,
}

/// Vote tallies and first-voter names for one discussion, recomputed on
/// every read path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoteSummary {
    pub agree_count: u64,
    pub disagree_count: u64,
    /// Username of the earliest-created agree vote, if any.
    pub first_agree_user: Option<String>,
    pub first_disagree_user: Option<String>,
}

/// Merges post fields, author name, vote summary, and the projected comment
/// thread into the full discussion response.
pub fn merge_discussion_response(
    post: Post,
    author: String,
    summary: VoteSummary,
    comments: Vec<CommentDto>,
) -> ProConDiscussionDto {
    ProConDiscussionDto {
        id: post.id,
        author,
        title: post.title,
        content: post.content,
        views: post.views,
        created_at: post.created_at,
        updated_at: post.updated_at,
        agree_count: summary.agree_count,
        disagree_count: summary.disagree_count,
        agree_user: summary.first_agree_user,
        disagree_user: summary.first_disagree_user,
        comments,
    }
}

/// Listing variant of the merge, without the comment thread.
pub fn merge_discussion_list_item(
    post: Post,
    author: String,
    summary: VoteSummary,
) -> ProConDiscussionListItemDto {
    ProConDiscussionListItemDto {
        id: post.id,
        author,
        title: post.title,
        content: post.content,
        views: post.views,
        created_at: post.created_at,
        updated_at: post.updated_at,
        agree_count: summary.agree_count,
        disagree_count: summary.disagree_count,
        agree_user: summary.first_agree_user,
        disagree_user: summary.first_disagree_user,
    }
}
