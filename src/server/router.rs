use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{get_user, login, logout},
        comment::{create_comment, dislike_comment, get_comments, like_comment},
        discussion::{
            create_pro_con_discussion, delete_pro_con_discussion, get_pro_con_discussion,
            get_pro_con_discussions, update_pro_con_discussion,
        },
        notification::{get_notifications, mark_notification_read},
        user::create_user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::user::create_user,
        crate::server::controller::auth::login,
        crate::server::controller::auth::logout,
        crate::server::controller::auth::get_user,
        crate::server::controller::discussion::create_pro_con_discussion,
        crate::server::controller::discussion::get_pro_con_discussions,
        crate::server::controller::discussion::get_pro_con_discussion,
        crate::server::controller::discussion::update_pro_con_discussion,
        crate::server::controller::discussion::delete_pro_con_discussion,
        crate::server::controller::comment::get_comments,
        crate::server::controller::comment::create_comment,
        crate::server::controller::comment::like_comment,
        crate::server::controller::comment::dislike_comment,
        crate::server::controller::notification::get_notifications,
        crate::server::controller::notification::mark_notification_read,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::user::CreateUserDto,
        crate::model::user::LoginDto,
        crate::model::user::UserResponseDto,
        crate::model::discussion::CreateProConDiscussionDto,
        crate::model::discussion::UpdateProConDiscussionDto,
        crate::model::discussion::ProConDiscussionDto,
        crate::model::discussion::ProConDiscussionListItemDto,
        crate::model::discussion::PaginatedProConDiscussionsDto,
        crate::model::comment::CreateCommentDto,
        crate::model::comment::CommentDto,
        crate::model::notification::NotificationDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route(
            "/api/pro-con-discussions",
            get(get_pro_con_discussions).post(create_pro_con_discussion),
        )
        .route(
            "/api/pro-con-discussions/{id}",
            get(get_pro_con_discussion)
                .patch(update_pro_con_discussion)
                .delete(delete_pro_con_discussion),
        )
        .route(
            "/api/posts/{post_id}/comments",
            get(get_comments).post(create_comment),
        )
        .route("/api/comments/{id}/like", post(like_comment))
        .route("/api/comments/{id}/dislike", post(dislike_comment))
        .route("/api/notification", get(get_notifications))
        .route("/api/notification/{id}/read", patch(mark_notification_read))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
