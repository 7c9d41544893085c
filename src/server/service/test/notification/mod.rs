use crate::server::{error::AppError, service::notification::NotificationService};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod mark_as_read;
