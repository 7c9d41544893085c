use super::*;
use test_utils::factory::{helpers::create_discussion_with_author, vote::VoteFactory};

/// Tests a stance change on an existing vote row.
///
/// The row is updated in place: same id, same creation time, flipped
/// stance, and the total vote count does not move.
///
/// Expected: Ok with the row flipped and no new row
#[tokio::test]
async fn flips_stance_without_adding_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discussion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _, discussion) = create_discussion_with_author(db).await?;
    let vote = VoteFactory::new(db, discussion.id, author.id)
        .is_agree(true)
        .build()
        .await?;

    let repo = ProConVoteRepository::new(db);
    repo.set_stance(vote.id, false).await?;

    let stored = repo
        .find_by_discussion_and_user(discussion.id, author.id)
        .await?
        .expect("vote should still exist");

    assert_eq!(stored.id, vote.id);
    assert!(!stored.is_agree);
    assert_eq!(repo.count_by_discussion(discussion.id).await?, 1);

    Ok(())
}
