use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};
use test_utils::factory::user::UserFactory;

/// Tests joining a user with their role name.
///
/// Expected: Ok with Some role name for a role-carrying user
#[tokio::test]
async fn returns_role_name_when_user_has_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = entity::role::ActiveModel {
        name: ActiveValue::Set("moderator".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let user = UserFactory::new(db).role_id(role.id).build().await?;

    let repo = UserRepository::new(db);
    let result = repo.find_with_role(user.id).await?;

    let (found, role_name) = result.expect("user should exist");
    assert_eq!(found.id, user.id);
    assert_eq!(role_name.as_deref(), Some("moderator"));

    Ok(())
}

/// Tests the join for a user without a role.
///
/// Expected: Ok with None role name
#[tokio::test]
async fn returns_none_role_for_roleless_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    let result = repo.find_with_role(user.id).await?;

    let (_, role_name) = result.expect("user should exist");
    assert_eq!(role_name, None);

    Ok(())
}
