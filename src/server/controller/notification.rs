use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, notification::NotificationDto},
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::notification::NotificationService, state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Get the caller's notifications, newest first.
///
/// # Authentication
/// Requires a logged-in user; only the caller's own notifications are listed
///
/// # Returns
/// - `200 OK` - The caller's notifications
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/notification",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "The caller's notifications", body = [NotificationDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = NotificationService::new(&state.db);
    let notifications = service.find_all_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(notifications)))
}

/// Mark a notification as read.
///
/// Idempotent: marking an already-read notification succeeds and changes
/// nothing. A notification owned by another user answers 404.
///
/// # Authentication
/// Requires a logged-in user who owns the notification
///
/// # Returns
/// - `200 OK` - The notification after the update
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown id or not owned by the caller
#[utoipa::path(
    patch,
    path = "/api/notification/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification id")
    ),
    responses(
        (status = 200, description = "The notification after the update", body = NotificationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = NotificationService::new(&state.db);
    let notification = service.mark_as_read(id, user.id).await?;

    Ok((StatusCode::OK, Json(notification)))
}
