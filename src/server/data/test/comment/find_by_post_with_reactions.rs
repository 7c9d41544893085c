use super::*;
use test_utils::factory::{
    comment::{create_comment, create_dislike, create_like},
    helpers::create_discussion_with_author,
    user::UserFactory,
};

/// Tests assembling comments with authors and reaction collections.
///
/// Two comments with mixed reactions must come back in creation order, each
/// carrying its own like/dislike user ids.
///
/// Expected: Ok with correctly grouped reactions
#[tokio::test]
async fn groups_reactions_per_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post, _) = create_discussion_with_author(db).await?;
    let liker = UserFactory::new(db).username("liker").build().await?;
    let disliker = UserFactory::new(db).username("disliker").build().await?;

    let first = create_comment(db, post.id, author.id).await?;
    let second = create_comment(db, post.id, author.id).await?;

    create_like(db, first.id, liker.id).await?;
    create_like(db, first.id, author.id).await?;
    create_dislike(db, first.id, disliker.id).await?;
    create_dislike(db, second.id, liker.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.find_by_post_with_reactions(post.id).await?;

    assert_eq!(comments.len(), 2);

    assert_eq!(comments[0].id, first.id);
    assert_eq!(comments[0].author, author.username);
    let mut first_likes = comments[0].likes.clone();
    first_likes.sort_unstable();
    let mut expected_likes = vec![liker.id, author.id];
    expected_likes.sort_unstable();
    assert_eq!(first_likes, expected_likes);
    assert_eq!(comments[0].dislikes, vec![disliker.id]);

    assert_eq!(comments[1].id, second.id);
    assert!(comments[1].likes.is_empty());
    assert_eq!(comments[1].dislikes, vec![liker.id]);

    Ok(())
}

/// Tests a post without comments.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_commentless_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post, _) = create_discussion_with_author(db).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.find_by_post_with_reactions(post.id).await?;

    assert!(comments.is_empty());

    Ok(())
}
