use crate::server::{
    error::AppError,
    model::discussion::{CreateProConDiscussionParams, UpdateProConDiscussionParams},
    service::discussion::ProConDiscussionService,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod find_all;
mod find_one_by_post_id;
mod update;
