use super::*;
use test_utils::factory::user::{create_user, UserFactory};

/// Tests repeated stance changes by the same user.
///
/// However often the author flips their stance, exactly one vote row for
/// (discussion, author) exists and the total count never grows.
///
/// Expected: Ok with one vote throughout
#[tokio::test]
async fn stance_changes_never_add_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).username("flipper").build().await.unwrap();

    let service = ProConDiscussionService::new(db);
    let created = service
        .create(CreateProConDiscussionParams {
            title: "Meetings could be emails".to_string(),
            content: "Most of them.".to_string(),
            author_id: user.id,
            is_agree: true,
        })
        .await
        .unwrap();

    for stance in [false, true, false] {
        let updated = service
            .update(
                created.id,
                UpdateProConDiscussionParams {
                    is_agree: Some(stance),
                    ..Default::default()
                },
                user.id,
            )
            .await
            .unwrap();

        assert_eq!(updated.agree_count + updated.disagree_count, 1);
        if stance {
            assert_eq!(updated.agree_count, 1);
            assert_eq!(updated.agree_user.as_deref(), Some("flipper"));
        } else {
            assert_eq!(updated.disagree_count, 1);
            assert_eq!(updated.disagree_user.as_deref(), Some("flipper"));
        }
    }

    Ok(())
}

/// Tests a partial update of the post fields.
///
/// Only the title is provided; content must survive and the refreshed
/// aggregate must reflect the new title.
///
/// Expected: Ok with title changed, content kept
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let service = ProConDiscussionService::new(db);
    let created = service
        .create(CreateProConDiscussionParams {
            title: "Old title".to_string(),
            content: "Original content".to_string(),
            author_id: user.id,
            is_agree: true,
        })
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateProConDiscussionParams {
                title: Some("New title".to_string()),
                ..Default::default()
            },
            user.id,
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "Original content");
    assert_eq!(updated.agree_count, 1);

    Ok(())
}

/// Tests updating a post that is not a discussion.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn updating_non_discussion_answers_not_found() -> Result<(), DbErr> {
    use test_utils::factory::post::create_post;

    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let post = create_post(db, user.id).await?;

    let service = ProConDiscussionService::new(db);
    let result = service
        .update(
            post.id,
            UpdateProConDiscussionParams {
                title: Some("Does not matter".to_string()),
                ..Default::default()
            },
            user.id,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
