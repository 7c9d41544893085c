use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get the comments of a discussion post.
///
/// Comments come in creation order with like/dislike counts. Logged-in
/// viewers get their own reaction flags; anonymous viewers get them as
/// false.
///
/// # Returns
/// - `200 OK` - Comments projected for the viewer
/// - `404 Not Found` - No post with that id
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post id of the discussion")
    ),
    responses(
        (status = 200, description = "Comments projected for the viewer", body = [CommentDto]),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;

    let service = CommentService::new(&state.db);
    let comments = service
        .find_all_by_post(post_id, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(comments)))
}

/// Comment on a discussion post.
///
/// Commenting on another user's discussion records a notification for the
/// post author.
///
/// # Authentication
/// Requires a logged-in user; the session user becomes the comment author
///
/// # Returns
/// - `201 Created` - The fresh comment projected for its author
/// - `400 Bad Request` - The post is not a pro/con discussion
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No post with that id
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post id of the discussion")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Post is not a pro/con discussion", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = CommentService::new(&state.db);
    let comment = service.create(post_id, &user, payload.content).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Toggle a like on a comment.
///
/// A first call adds the like (clearing any dislike by the same user); a
/// repeated call removes it.
///
/// # Authentication
/// Requires a logged-in user
///
/// # Returns
/// - `204 No Content` - Reaction toggled
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No comment with that id
#[utoipa::path(
    post,
    path = "/api/comments/{id}/like",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Reaction toggled"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = CommentService::new(&state.db);
    service.like(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Toggle a dislike on a comment; mirror of the like endpoint.
///
/// # Authentication
/// Requires a logged-in user
///
/// # Returns
/// - `204 No Content` - Reaction toggled
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No comment with that id
#[utoipa::path(
    post,
    path = "/api/comments/{id}/dislike",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Reaction toggled"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dislike_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = CommentService::new(&state.db);
    service.dislike(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
