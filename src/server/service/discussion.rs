//! Pro/con discussion orchestration.
//!
//! Every read path re-derives vote tallies and first-voter names through the
//! injected `VoteTally` capability and merges them with the stored post,
//! author, and comment data. The persistence store is the single source of
//! truth; nothing is cached between requests.

use sea_orm::DatabaseConnection;

use crate::{
    model::discussion::{PaginatedProConDiscussionsDto, ProConDiscussionDto},
    server::{
        data::{
            comment::CommentRepository, discussion::ProConDiscussionRepository,
            post::PostRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            comment::project_comment,
            discussion::{
                merge_discussion_list_item, merge_discussion_response,
                CreateProConDiscussionParams, ProConDiscussion, UpdateProConDiscussionParams,
                VoteSummary,
            },
            post::{Post, UpdatePostParams},
        },
        service::{
            post::PostService,
            vote::{ProConVoteService, VoteTally},
        },
    },
};

pub struct ProConDiscussionService<'a, T: VoteTally> {
    db: &'a DatabaseConnection,
    tally: T,
}

impl<'a> ProConDiscussionService<'a, ProConVoteService<'a>> {
    /// Creates the service with the production vote tally.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            tally: ProConVoteService::new(db),
        }
    }
}

impl<'a, T: VoteTally> ProConDiscussionService<'a, T> {
    /// Creates the service with an injected vote tally.
    pub fn with_tally(db: &'a DatabaseConnection, tally: T) -> Self {
        Self { db, tally }
    }

    /// Creates a discussion: post, extension row, and the author's initial
    /// vote in one transaction.
    ///
    /// # Returns
    /// - `Ok(ProConDiscussionDto)` - The full aggregated response
    /// - `Err(AppError)` - Database error; nothing was written
    pub async fn create(
        &self,
        param: CreateProConDiscussionParams,
    ) -> Result<ProConDiscussionDto, AppError> {
        let repo = ProConDiscussionRepository::new(self.db);

        let author_id = param.author_id;
        let (post, discussion) = repo.create_with_initial_vote(param).await?;

        self.build_response(post, discussion.id, Some(author_id))
            .await
    }

    /// Gets a page of discussions plus the unfiltered total count.
    ///
    /// Pages are ordered by post creation time descending so limit/offset
    /// pagination stays stable. Tallies are recomputed per row.
    pub async fn find_all(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<PaginatedProConDiscussionsDto, AppError> {
        let repo = ProConDiscussionRepository::new(self.db);

        let page = repo.find_page(limit, offset).await?;
        let total_count = repo.count_all().await?;

        let mut posts = Vec::with_capacity(page.len());
        for (discussion, post) in page {
            let author = self.author_username(post.author_id).await?;
            let summary = self.vote_summary(discussion.id).await?;
            posts.push(merge_discussion_list_item(post, author, summary));
        }

        Ok(PaginatedProConDiscussionsDto { posts, total_count })
    }

    /// Gets one discussion with its comment thread.
    ///
    /// # Returns
    /// - `Ok(ProConDiscussionDto)` - The full aggregated response
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::BadRequest)` - The post exists but is not a pro/con
    ///   discussion
    pub async fn find_one(
        &self,
        id: i32,
        viewer_id: Option<i32>,
    ) -> Result<ProConDiscussionDto, AppError> {
        let post_repo = PostRepository::new(self.db);
        let post = post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

        let discussion = ProConDiscussionRepository::new(self.db)
            .find_by_post_id(id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest("Post is not a pro/con discussion".to_string())
            })?;

        self.build_response(post, discussion.id, viewer_id).await
    }

    /// Looks up the discussion extension of a post; `None` on miss.
    pub async fn find_one_by_post_id(
        &self,
        post_id: i32,
    ) -> Result<Option<ProConDiscussion>, AppError> {
        let repo = ProConDiscussionRepository::new(self.db);
        Ok(repo.find_by_post_id(post_id).await?)
    }

    /// Throwing variant of `find_one_by_post_id`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No discussion attached to that post
    pub async fn find_one_by_post_id_throw(
        &self,
        post_id: i32,
    ) -> Result<ProConDiscussion, AppError> {
        self.find_one_by_post_id(post_id).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Post {} does not exist or is not a pro/con discussion",
                post_id
            ))
        })
    }

    /// Applies a partial update.
    ///
    /// A stance change goes through the vote tally upsert before any post
    /// field is written; only provided fields are updated.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateProConDiscussionParams,
        author_id: i32,
    ) -> Result<ProConDiscussionDto, AppError> {
        let discussion = self.find_one_by_post_id_throw(id).await?;

        if let Some(is_agree) = param.is_agree {
            self.tally.upsert(is_agree, author_id, discussion.id).await?;
        }

        let post_repo = PostRepository::new(self.db);
        let post = post_repo
            .update(
                id,
                UpdatePostParams {
                    title: param.title,
                    content: param.content,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

        self.build_response(post, discussion.id, Some(author_id))
            .await
    }

    /// Removes a discussion by deleting its post.
    ///
    /// Delegated entirely to the generic post removal; FK cascades clean up
    /// the discussion, votes, comments, and reactions.
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        PostService::new(self.db).remove(id).await
    }

    /// Recomputes the four tally values for a discussion.
    async fn vote_summary(&self, discussion_id: i32) -> Result<VoteSummary, AppError> {
        let agree_count = self.tally.agree_count(discussion_id).await?;
        let disagree_count = self.tally.disagree_count(discussion_id).await?;
        let (first_agree_user, first_disagree_user) =
            self.tally.find_first_vote_users(discussion_id).await?;

        Ok(VoteSummary {
            agree_count,
            disagree_count,
            first_agree_user,
            first_disagree_user,
        })
    }

    async fn author_username(&self, author_id: i32) -> Result<String, AppError> {
        UserRepository::new(self.db)
            .find_by_id(author_id)
            .await?
            .map(|user| user.username)
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", author_id)))
    }

    /// Assembles the full aggregated response for a post and its discussion.
    async fn build_response(
        &self,
        post: Post,
        discussion_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<ProConDiscussionDto, AppError> {
        let author = self.author_username(post.author_id).await?;
        let summary = self.vote_summary(discussion_id).await?;

        let comments = CommentRepository::new(self.db)
            .find_by_post_with_reactions(post.id)
            .await?
            .iter()
            .map(|comment| project_comment(comment, viewer_id))
            .collect();

        Ok(merge_discussion_response(post, author, summary, comments))
    }
}
