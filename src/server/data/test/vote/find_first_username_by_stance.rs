use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::{
    helpers::create_discussion_with_author, user::UserFactory, vote::VoteFactory,
};

/// Tests that the earliest-created vote of each stance wins.
///
/// Expected: Ok with the first agree voter's and first disagree voter's
/// usernames
#[tokio::test]
async fn returns_earliest_voter_per_stance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discussion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, discussion) = create_discussion_with_author(db).await?;
    let early_agree = UserFactory::new(db).username("early_agree").build().await?;
    let late_agree = UserFactory::new(db).username("late_agree").build().await?;
    let only_disagree = UserFactory::new(db).username("only_disagree").build().await?;

    let base = Utc::now();
    VoteFactory::new(db, discussion.id, late_agree.id)
        .is_agree(true)
        .created_at(base + Duration::minutes(5))
        .build()
        .await?;
    VoteFactory::new(db, discussion.id, early_agree.id)
        .is_agree(true)
        .created_at(base)
        .build()
        .await?;
    VoteFactory::new(db, discussion.id, only_disagree.id)
        .is_agree(false)
        .created_at(base + Duration::minutes(1))
        .build()
        .await?;

    let repo = ProConVoteRepository::new(db);

    let first_agree = repo.find_first_username_by_stance(discussion.id, true).await?;
    let first_disagree = repo
        .find_first_username_by_stance(discussion.id, false)
        .await?;

    assert_eq!(first_agree.as_deref(), Some("early_agree"));
    assert_eq!(first_disagree.as_deref(), Some("only_disagree"));

    Ok(())
}

/// Tests a stance with no votes.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_stance_has_no_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discussion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _, discussion) = create_discussion_with_author(db).await?;
    VoteFactory::new(db, discussion.id, author.id).is_agree(true).build().await?;

    let repo = ProConVoteRepository::new(db);
    let first_disagree = repo
        .find_first_username_by_stance(discussion.id, false)
        .await?;

    assert!(first_disagree.is_none());

    Ok(())
}
