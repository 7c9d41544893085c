//! Discussion factory for creating test pro/con discussion entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates the discussion extension row for an existing post.
pub async fn create_discussion(
    db: &DatabaseConnection,
    post_id: i32,
) -> Result<entity::pro_con_discussion::Model, DbErr> {
    entity::pro_con_discussion::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
