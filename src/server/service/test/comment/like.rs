use super::*;
use test_utils::factory::{
    comment::create_comment, helpers::create_discussion_with_author, user::create_user,
};

/// Tests the like toggle cycle.
///
/// First like adds the reaction, second like removes it; the viewer's
/// projection tracks both states.
///
/// Expected: Ok with like count 1 then 0
#[tokio::test]
async fn like_toggles_on_and_off() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post, _) = create_discussion_with_author(db).await?;
    let comment = create_comment(db, post.id, author.id).await?;
    let viewer = create_user(db).await?;

    let service = CommentService::new(db);

    service.like(comment.id, viewer.id).await.unwrap();
    let after_like = service
        .find_all_by_post(post.id, Some(viewer.id))
        .await
        .unwrap();
    assert_eq!(after_like[0].like, 1);
    assert!(after_like[0].liked_by_user);

    service.like(comment.id, viewer.id).await.unwrap();
    let after_unlike = service
        .find_all_by_post(post.id, Some(viewer.id))
        .await
        .unwrap();
    assert_eq!(after_unlike[0].like, 0);
    assert!(!after_unlike[0].liked_by_user);

    Ok(())
}

/// Tests that liking clears an existing dislike by the same user.
///
/// At most one like and one dislike per (comment, user) exist at any point,
/// and never both.
///
/// Expected: Ok with dislike gone once the like lands
#[tokio::test]
async fn like_displaces_existing_dislike() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post, _) = create_discussion_with_author(db).await?;
    let comment = create_comment(db, post.id, author.id).await?;
    let viewer = create_user(db).await?;

    let service = CommentService::new(db);

    service.dislike(comment.id, viewer.id).await.unwrap();
    service.like(comment.id, viewer.id).await.unwrap();

    let projected = service
        .find_all_by_post(post.id, Some(viewer.id))
        .await
        .unwrap();
    assert_eq!(projected[0].like, 1);
    assert_eq!(projected[0].dislike, 0);
    assert!(projected[0].liked_by_user);
    assert!(!projected[0].disliked_by_user);

    Ok(())
}

/// Tests reacting to a missing comment.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_comment_answers_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = create_user(db).await?;

    let service = CommentService::new(db);
    let result = service.like(4242, viewer.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
