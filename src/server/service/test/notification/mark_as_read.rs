use super::*;
use test_utils::factory::{notification::create_notification, user::create_user};

/// Tests the idempotent double mark.
///
/// Marking the same notification twice succeeds both times and leaves it
/// read.
///
/// Expected: Ok twice with is_read true
#[tokio::test]
async fn double_mark_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let notification = create_notification(db, user.id).await?;

    let service = NotificationService::new(db);

    let first = service.mark_as_read(notification.id, user.id).await.unwrap();
    assert!(first.is_read);

    let second = service.mark_as_read(notification.id, user.id).await.unwrap();
    assert!(second.is_read);

    Ok(())
}

/// Tests marking another user's notification.
///
/// Ownership is checked; a foreign notification answers NotFound so the
/// response does not reveal whether the id exists.
///
/// Expected: Err(AppError::NotFound) and the flag untouched
#[tokio::test]
async fn foreign_notification_answers_not_found() -> Result<(), DbErr> {
    use crate::server::data::notification::NotificationRepository;

    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let stranger = create_user(db).await?;
    let notification = create_notification(db, owner.id).await?;

    let service = NotificationService::new(db);
    let result = service.mark_as_read(notification.id, stranger.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let stored = NotificationRepository::new(db)
        .find_by_id(notification.id)
        .await?
        .unwrap();
    assert!(!stored.is_read);

    Ok(())
}
