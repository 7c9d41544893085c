use super::*;
use crate::server::data::notification::NotificationRepository;
use test_utils::factory::{
    helpers::create_discussion_with_author, post::create_post, user::UserFactory,
};

/// Tests commenting on another user's discussion.
///
/// The comment lands, projected for its author, and the post author gets a
/// notification mentioning the commenter.
///
/// Expected: Ok with a notification for the post author
#[tokio::test]
async fn foreign_comment_notifies_post_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (post_author, post, _) = create_discussion_with_author(db).await?;
    let commenter = UserFactory::new(db).username("commenter").build().await?;

    let service = CommentService::new(db);
    let comment = service
        .create(
            post.id,
            &User::from_entity(commenter),
            "Interesting point.".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(comment.author, "commenter");
    assert_eq!(comment.like, 0);
    assert_eq!(comment.dislike, 0);

    let notifications = NotificationRepository::new(db)
        .find_by_user(post_author.id)
        .await?;
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].content.contains("commenter"));
    assert!(!notifications[0].is_read);

    Ok(())
}

/// Tests commenting on one's own discussion.
///
/// Expected: Ok without a self-notification
#[tokio::test]
async fn own_comment_creates_no_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (post_author, post, _) = create_discussion_with_author(db).await?;

    let service = CommentService::new(db);
    service
        .create(
            post.id,
            &User::from_entity(post_author.clone()),
            "Replying to myself.".to_string(),
        )
        .await
        .unwrap();

    let notifications = NotificationRepository::new(db)
        .find_by_user(post_author.id)
        .await?;
    assert!(notifications.is_empty());

    Ok(())
}

/// Tests commenting on a post without a discussion extension.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn plain_post_answers_bad_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = UserFactory::new(db).build().await?;
    let plain_post = create_post(db, author.id).await?;

    let service = CommentService::new(db);
    let result = service
        .create(
            plain_post.id,
            &User::from_entity(author),
            "Lost comment.".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
