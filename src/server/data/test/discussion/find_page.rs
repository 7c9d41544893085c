use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::{
    discussion::create_discussion, post::PostFactory, user::create_user,
};

/// Tests page ordering and the pagination window.
///
/// Three discussions created at distinct times must come back newest first,
/// and limit/offset must slice that order.
///
/// Expected: Ok with newest-first pages
#[tokio::test]
async fn orders_newest_first_and_paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discussion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let base = Utc::now();

    let mut post_ids = Vec::new();
    for i in 0..3 {
        let post = PostFactory::new(db, user.id)
            .title(format!("Discussion {}", i))
            .created_at(base + Duration::minutes(i))
            .build()
            .await?;
        create_discussion(db, post.id).await?;
        post_ids.push(post.id);
    }

    let repo = ProConDiscussionRepository::new(db);

    let first_page = repo.find_page(2, 0).await?;
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].1.id, post_ids[2]);
    assert_eq!(first_page[1].1.id, post_ids[1]);

    let second_page = repo.find_page(2, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].1.id, post_ids[0]);

    Ok(())
}

/// Tests that plain posts never appear in the listing and that the total
/// count ignores pagination.
///
/// Expected: Ok with only discussion posts and the unfiltered count
#[tokio::test]
async fn excludes_plain_posts_and_counts_all() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discussion_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    for _ in 0..3 {
        let post = PostFactory::new(db, user.id).build().await?;
        create_discussion(db, post.id).await?;
    }
    // A plain post without the discussion extension.
    PostFactory::new(db, user.id).build().await?;

    let repo = ProConDiscussionRepository::new(db);

    let page = repo.find_page(1, 0).await?;
    assert_eq!(page.len(), 1);

    let total = repo.count_all().await?;
    assert_eq!(total, 3);

    Ok(())
}
