//! Notification listing and read-flag handling.

use sea_orm::DatabaseConnection;

use crate::{
    model::notification::NotificationDto,
    server::{data::notification::NotificationRepository, error::AppError},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all of a user's notifications, newest first.
    pub async fn find_all_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<NotificationDto>, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notifications = repo.find_by_user(user_id).await?;

        Ok(notifications
            .into_iter()
            .map(|notification| notification.into_dto())
            .collect())
    }

    /// Marks a notification as read.
    ///
    /// Idempotent: marking an already-read notification succeeds and changes
    /// nothing. A notification owned by another user answers `NotFound`, so
    /// the response does not reveal whether the id exists.
    ///
    /// # Returns
    /// - `Ok(NotificationDto)` - The notification after the update
    /// - `Err(AppError::NotFound)` - Unknown id or not owned by the caller
    pub async fn mark_as_read(
        &self,
        notification_id: i32,
        user_id: i32,
    ) -> Result<NotificationDto, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo
            .find_by_id(notification_id)
            .await?
            .filter(|notification| notification.user_id == user_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Notification {} not found", notification_id))
            })?;

        if !notification.is_read {
            repo.mark_as_read(notification.id).await?;
        }

        let updated = repo
            .find_by_id(notification_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Notification {} not found", notification_id))
            })?;

        Ok(updated.into_dto())
    }
}
