use super::*;
use crate::server::service::vote::VoteTally;
use test_utils::factory::{
    discussion::create_discussion, post::PostFactory, user::create_user, vote::VoteFactory,
};

/// Canned tally standing in for the vote service, exercising the injection
/// seam: the discussion service must not care where the numbers come from.
struct FixedTally;

impl VoteTally for FixedTally {
    async fn agree_count(&self, _discussion_id: i32) -> Result<u64, AppError> {
        Ok(7)
    }

    async fn disagree_count(&self, _discussion_id: i32) -> Result<u64, AppError> {
        Ok(3)
    }

    async fn find_first_vote_users(
        &self,
        _discussion_id: i32,
    ) -> Result<(Option<String>, Option<String>), AppError> {
        Ok((Some("canned_agree".to_string()), None))
    }

    async fn upsert(
        &self,
        _is_agree: bool,
        _user_id: i32,
        _discussion_id: i32,
    ) -> Result<(), AppError> {
        Ok(())
    }
}

/// Tests the listing with an injected tally.
///
/// Expected: Ok with the canned tallies merged into every row
#[tokio::test]
async fn merges_injected_tally_into_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let post = PostFactory::new(db, user.id).build().await?;
    create_discussion(db, post.id).await?;

    let service = ProConDiscussionService::with_tally(db, FixedTally);
    let page = service.find_all(10, 0).await.unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.posts[0].agree_count, 7);
    assert_eq!(page.posts[0].disagree_count, 3);
    assert_eq!(page.posts[0].agree_user.as_deref(), Some("canned_agree"));
    assert_eq!(page.posts[0].disagree_user, None);

    Ok(())
}

/// Tests the listing against the real tally with a mixed vote set.
///
/// Expected: Ok with per-row tallies and the total count unaffected by the
/// pagination window
#[tokio::test]
async fn real_tally_counts_per_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let voter = create_user(db).await?;

    let post = PostFactory::new(db, author.id).build().await?;
    let discussion = create_discussion(db, post.id).await?;
    VoteFactory::new(db, discussion.id, author.id).is_agree(true).build().await?;
    VoteFactory::new(db, discussion.id, voter.id).is_agree(false).build().await?;

    let service = ProConDiscussionService::new(db);
    let page = service.find_all(10, 0).await.unwrap();

    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.posts[0].agree_count, 1);
    assert_eq!(page.posts[0].disagree_count, 1);
    assert_eq!(page.total_count, 1);

    Ok(())
}
