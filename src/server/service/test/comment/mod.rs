use crate::server::{
    error::AppError, model::user::User, service::comment::CommentService,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod like;
