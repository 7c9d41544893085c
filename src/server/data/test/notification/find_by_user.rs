use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::{notification::NotificationFactory, user::create_user};

/// Tests listing scope and ordering.
///
/// Only the requested user's notifications come back, newest first.
///
/// Expected: Ok with two rows in reverse creation order
#[tokio::test]
async fn lists_own_notifications_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let other = create_user(db).await?;
    let base = Utc::now();

    let older = NotificationFactory::new(db, user.id)
        .content("older")
        .created_at(base)
        .build()
        .await?;
    let newer = NotificationFactory::new(db, user.id)
        .content("newer")
        .created_at(base + Duration::minutes(1))
        .build()
        .await?;
    NotificationFactory::new(db, other.id).build().await?;

    let repo = NotificationRepository::new(db);
    let notifications = repo.find_by_user(user.id).await?;

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].id, newer.id);
    assert_eq!(notifications[1].id, older.id);

    Ok(())
}
