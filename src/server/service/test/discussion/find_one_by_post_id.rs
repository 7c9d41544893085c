use super::*;
use test_utils::factory::{post::create_post, user::create_user};

/// Tests the lookup pair on a post without a discussion.
///
/// The plain variant answers Ok(None); the throwing variant answers
/// NotFound for the same input.
///
/// Expected: Ok(None) and Err(AppError::NotFound)
#[tokio::test]
async fn plain_and_throwing_variants_disagree_only_on_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let post = create_post(db, user.id).await?;

    let service = ProConDiscussionService::new(db);

    let quiet = service.find_one_by_post_id(post.id).await.unwrap();
    assert!(quiet.is_none());

    let throwing = service.find_one_by_post_id_throw(post.id).await;
    assert!(matches!(throwing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests both variants on a real discussion.
///
/// Expected: both answer the same discussion
#[tokio::test]
async fn both_variants_find_existing_discussion() -> Result<(), DbErr> {
    use test_utils::factory::helpers::create_discussion_with_author;

    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post, discussion) = create_discussion_with_author(db).await?;

    let service = ProConDiscussionService::new(db);

    let quiet = service.find_one_by_post_id(post.id).await.unwrap();
    assert_eq!(quiet.map(|d| d.id), Some(discussion.id));

    let throwing = service.find_one_by_post_id_throw(post.id).await.unwrap();
    assert_eq!(throwing.id, discussion.id);

    Ok(())
}
