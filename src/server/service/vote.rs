//! Vote tallying for pro/con discussions.
//!
//! The discussion service consumes the narrow `VoteTally` capability rather
//! than this concrete type, so the dependency points one way only and tests
//! can substitute a canned tally.

use sea_orm::DatabaseConnection;

use crate::server::{data::vote::ProConVoteRepository, error::AppError};

/// Narrow vote-tally capability consumed by the discussion service.
pub trait VoteTally {
    /// Count of agree votes on a discussion.
    fn agree_count(
        &self,
        discussion_id: i32,
    ) -> impl std::future::Future<Output = Result<u64, AppError>> + Send;

    /// Count of disagree votes on a discussion.
    fn disagree_count(
        &self,
        discussion_id: i32,
    ) -> impl std::future::Future<Output = Result<u64, AppError>> + Send;

    /// Usernames of the earliest agree and disagree voters.
    fn find_first_vote_users(
        &self,
        discussion_id: i32,
    ) -> impl std::future::Future<Output = Result<(Option<String>, Option<String>), AppError>> + Send;

    /// Inserts a user's vote or updates the stance of their existing one.
    fn upsert(
        &self,
        is_agree: bool,
        user_id: i32,
        discussion_id: i32,
    ) -> impl std::future::Future<Output = Result<(), AppError>> + Send;
}

pub struct ProConVoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProConVoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl VoteTally for ProConVoteService<'_> {
    async fn agree_count(&self, discussion_id: i32) -> Result<u64, AppError> {
        let repo = ProConVoteRepository::new(self.db);
        Ok(repo.count_by_stance(discussion_id, true).await?)
    }

    async fn disagree_count(&self, discussion_id: i32) -> Result<u64, AppError> {
        let repo = ProConVoteRepository::new(self.db);
        Ok(repo.count_by_stance(discussion_id, false).await?)
    }

    async fn find_first_vote_users(
        &self,
        discussion_id: i32,
    ) -> Result<(Option<String>, Option<String>), AppError> {
        let repo = ProConVoteRepository::new(self.db);

        let first_agree = repo.find_first_username_by_stance(discussion_id, true).await?;
        let first_disagree = repo
            .find_first_username_by_stance(discussion_id, false)
            .await?;

        Ok((first_agree, first_disagree))
    }

    /// Upsert keyed by (discussion, user): a stance change updates the
    /// existing row in place and never inserts a second one, so the vote
    /// count and first-voter ordering are unaffected.
    async fn upsert(
        &self,
        is_agree: bool,
        user_id: i32,
        discussion_id: i32,
    ) -> Result<(), AppError> {
        let repo = ProConVoteRepository::new(self.db);

        match repo
            .find_by_discussion_and_user(discussion_id, user_id)
            .await?
        {
            Some(existing) => {
                if existing.is_agree != is_agree {
                    repo.set_stance(existing.id, is_agree).await?;
                }
            }
            None => {
                repo.create(discussion_id, user_id, is_agree).await?;
            }
        }

        Ok(())
    }
}
