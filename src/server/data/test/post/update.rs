use super::*;
use test_utils::factory::{post::PostFactory, user::create_user};

/// Tests a partial update touching only the title.
///
/// Expected: Ok with new title, unchanged content, refreshed updated_at
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discussion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let post = PostFactory::new(db, user.id)
        .title("Original title")
        .content("Original content")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let updated = repo
        .update(
            post.id,
            UpdatePostParams {
                title: Some("New title".to_string()),
                content: None,
            },
        )
        .await?
        .expect("post should exist");

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "Original content");
    assert!(updated.updated_at >= post.updated_at);

    Ok(())
}

/// Tests updating a missing post.
///
/// Expected: Ok(None) rather than an error
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discussion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo
        .update(
            9999,
            UpdatePostParams {
                title: Some("New title".to_string()),
                content: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests an update with no fields.
///
/// Expected: Ok with the post unchanged
#[tokio::test]
async fn empty_update_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discussion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let post = PostFactory::new(db, user.id).title("Kept").build().await?;

    let repo = PostRepository::new(db);
    let updated = repo
        .update(post.id, UpdatePostParams::default())
        .await?
        .expect("post should exist");

    assert_eq!(updated.title, "Kept");
    assert_eq!(updated.updated_at, post.updated_at);

    Ok(())
}
