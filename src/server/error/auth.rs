use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session; the caller is not logged in.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session carries a user id that no longer exists in the database.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login attempt with an unknown username or a wrong password.
    ///
    /// Both cases map to the same variant so the response never reveals
    /// whether the username exists.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the precise cause is logged at debug
/// level for diagnostics.
///
/// # Returns
/// - 401 Unauthorized - For all authentication failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        let message = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => "Not logged in",
            Self::InvalidCredentials => "Invalid username or password",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
