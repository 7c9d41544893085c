use crate::server::data::notification::NotificationRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod find_by_user;
