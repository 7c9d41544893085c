use crate::server::{
    data::discussion::ProConDiscussionRepository,
    model::discussion::CreateProConDiscussionParams,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod find_page;
