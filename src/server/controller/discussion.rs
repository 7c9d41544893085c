use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        discussion::{
            CreateProConDiscussionDto, PaginatedProConDiscussionsDto, ProConDiscussionDto,
            UpdateProConDiscussionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::discussion::{CreateProConDiscussionParams, UpdateProConDiscussionParams},
        service::discussion::ProConDiscussionService,
        state::AppState,
    },
};

/// Tag for grouping pro/con discussion endpoints in OpenAPI documentation
pub static DISCUSSION_TAG: &str = "pro-con-discussion";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    10
}

/// Create a pro/con discussion.
///
/// Creates the post, its discussion extension, and the author's initial vote
/// in one transaction, then returns the full aggregated response.
///
/// # Authentication
/// Requires a logged-in user; the session user becomes the author
///
/// # Returns
/// - `201 Created` - Aggregated discussion response
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/pro-con-discussions",
    tag = DISCUSSION_TAG,
    request_body = CreateProConDiscussionDto,
    responses(
        (status = 201, description = "Discussion created", body = ProConDiscussionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pro_con_discussion(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProConDiscussionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ProConDiscussionService::new(&state.db);
    let discussion = service
        .create(CreateProConDiscussionParams {
            title: payload.title,
            content: payload.content,
            author_id: user.id,
            is_agree: payload.is_agree,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(discussion)))
}

/// Get a page of pro/con discussions.
///
/// Returns discussions ordered newest first, each with freshly computed vote
/// tallies and first-voter names, plus the total discussion count
/// (unfiltered by pagination).
///
/// # Returns
/// - `200 OK` - Page of discussions and total count
#[utoipa::path(
    get,
    path = "/api/pro-con-discussions",
    tag = DISCUSSION_TAG,
    params(
        ("limit" = u64, Query, description = "Page size, defaults to 10"),
        ("offset" = u64, Query, description = "Rows to skip, defaults to 0")
    ),
    responses(
        (status = 200, description = "Page of discussions", body = PaginatedProConDiscussionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pro_con_discussions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProConDiscussionService::new(&state.db);

    let page = service.find_all(params.limit, params.offset).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a single pro/con discussion with its comment thread.
///
/// The viewer is optional: logged-in viewers get their own reaction flags on
/// each comment, anonymous viewers get them as false.
///
/// # Returns
/// - `200 OK` - Aggregated discussion response
/// - `400 Bad Request` - The post exists but is not a pro/con discussion
/// - `404 Not Found` - No post with that id
#[utoipa::path(
    get,
    path = "/api/pro-con-discussions/{id}",
    tag = DISCUSSION_TAG,
    params(
        ("id" = i32, Path, description = "Post id of the discussion")
    ),
    responses(
        (status = 200, description = "Aggregated discussion response", body = ProConDiscussionDto),
        (status = 400, description = "Post is not a pro/con discussion", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pro_con_discussion(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current_user().await?;

    let service = ProConDiscussionService::new(&state.db);
    let discussion = service.find_one(id, viewer.map(|u| u.id)).await?;

    Ok((StatusCode::OK, Json(discussion)))
}

/// Partially update a pro/con discussion.
///
/// Only provided fields are written. A stance change is applied through the
/// vote tally upsert (one vote per user per discussion) before the post
/// fields are updated.
///
/// # Authentication
/// Requires a logged-in user; the stance change is keyed to the session user
///
/// # Returns
/// - `200 OK` - Refreshed aggregated response
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No discussion attached to that post id
#[utoipa::path(
    patch,
    path = "/api/pro-con-discussions/{id}",
    tag = DISCUSSION_TAG,
    params(
        ("id" = i32, Path, description = "Post id of the discussion")
    ),
    request_body = UpdateProConDiscussionDto,
    responses(
        (status = 200, description = "Refreshed aggregated response", body = ProConDiscussionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Discussion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pro_con_discussion(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProConDiscussionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ProConDiscussionService::new(&state.db);
    let discussion = service
        .update(
            id,
            UpdateProConDiscussionParams {
                title: payload.title,
                content: payload.content,
                is_agree: payload.is_agree,
            },
            user.id,
        )
        .await?;

    Ok((StatusCode::OK, Json(discussion)))
}

/// Remove a pro/con discussion.
///
/// Deletes the underlying post; cascades clean up the discussion extension,
/// votes, comments, and reactions.
///
/// # Authentication
/// Requires a logged-in user
///
/// # Returns
/// - `204 No Content` - Discussion removed
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No post with that id
#[utoipa::path(
    delete,
    path = "/api/pro-con-discussions/{id}",
    tag = DISCUSSION_TAG,
    params(
        ("id" = i32, Path, description = "Post id of the discussion")
    ),
    responses(
        (status = 204, description = "Discussion removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pro_con_discussion(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    let service = ProConDiscussionService::new(&state.db);
    service.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
