use super::*;
use crate::model::user::CreateUserDto;

/// Tests registration and the resulting public projection.
///
/// A fresh user has no role, which projects as an empty string; the
/// password never appears in the response shape.
///
/// Expected: Ok with role == ""
#[tokio::test]
async fn registers_and_projects_empty_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let created = service
        .register(CreateUserDto {
            username: "mina".to_string(),
            email: "mina@example.com".to_string(),
            password: "correct horse battery staple".to_string(),
            avatar_url: None,
        })
        .await
        .unwrap();

    assert_eq!(created.username, "mina");
    assert_eq!(created.role, "");

    Ok(())
}

/// Tests registering the same username twice.
///
/// The unique violation must surface as a client error, not a generic
/// persistence failure.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn duplicate_username_answers_bad_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    let dto = CreateUserDto {
        username: "mina".to_string(),
        email: "mina@example.com".to_string(),
        password: "correct horse battery staple".to_string(),
        avatar_url: None,
    };

    service.register(dto.clone()).await.unwrap();

    let result = service
        .register(CreateUserDto {
            email: "other@example.com".to_string(),
            ..dto
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
