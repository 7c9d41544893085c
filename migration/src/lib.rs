pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_role_table;
mod m20250901_000002_create_user_table;
mod m20250901_000003_create_post_table;
mod m20250902_000004_create_pro_con_discussion_table;
mod m20250902_000005_create_pro_con_vote_table;
mod m20250903_000006_create_comment_table;
mod m20250903_000007_create_comment_like_table;
mod m20250903_000008_create_comment_dislike_table;
mod m20250904_000009_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_role_table::Migration),
            Box::new(m20250901_000002_create_user_table::Migration),
            Box::new(m20250901_000003_create_post_table::Migration),
            Box::new(m20250902_000004_create_pro_con_discussion_table::Migration),
            Box::new(m20250902_000005_create_pro_con_vote_table::Migration),
            Box::new(m20250903_000006_create_comment_table::Migration),
            Box::new(m20250903_000007_create_comment_like_table::Migration),
            Box::new(m20250903_000008_create_comment_dislike_table::Migration),
            Box::new(m20250904_000009_create_notification_table::Migration),
        ]
    }
}
