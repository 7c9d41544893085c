use super::*;
use test_utils::factory::user::UserFactory;

/// Tests the create-then-read round trip.
///
/// Creating a discussion with an agree stance and immediately reading it
/// back must report one agree vote, zero disagree votes, the creator as
/// first agree voter, and no first disagree voter.
///
/// Expected: Ok with agree_count=1, disagree_count=0
#[tokio::test]
async fn create_round_trip_reports_initial_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).username("creator").build().await.unwrap();

    let service = ProConDiscussionService::new(db);
    let created = service
        .create(CreateProConDiscussionParams {
            title: "Tabs over spaces".to_string(),
            content: "Fight me.".to_string(),
            author_id: user.id,
            is_agree: true,
        })
        .await
        .unwrap();

    assert_eq!(created.author, "creator");
    assert_eq!(created.agree_count, 1);
    assert_eq!(created.disagree_count, 0);
    assert_eq!(created.agree_user.as_deref(), Some("creator"));
    assert_eq!(created.disagree_user, None);
    assert!(created.comments.is_empty());

    let read_back = service.find_one(created.id, None).await.unwrap();
    assert_eq!(read_back, created);

    Ok(())
}

/// Tests creating with a disagree stance.
///
/// Expected: Ok with the tallies mirrored
#[tokio::test]
async fn create_with_disagree_stance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).username("sceptic").build().await.unwrap();

    let service = ProConDiscussionService::new(db);
    let created = service
        .create(CreateProConDiscussionParams {
            title: "Estimates are useful".to_string(),
            content: "Doubt.".to_string(),
            author_id: user.id,
            is_agree: false,
        })
        .await
        .unwrap();

    assert_eq!(created.agree_count, 0);
    assert_eq!(created.disagree_count, 1);
    assert_eq!(created.agree_user, None);
    assert_eq!(created.disagree_user.as_deref(), Some("sceptic"));

    Ok(())
}
