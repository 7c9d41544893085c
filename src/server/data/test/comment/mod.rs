use crate::server::data::comment::CommentRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod find_by_post_with_reactions;
