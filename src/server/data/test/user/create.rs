use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the username, email, hash, and
/// avatar, and that the returned domain model carries no role.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "mina".to_string(),
            email: "mina@example.com".to_string(),
            password_hash: "$argon2id$fake-hash".to_string(),
            avatar_url: Some("https://cdn.example.com/mina.png".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "mina");
    assert_eq!(user.email, "mina@example.com");
    assert_eq!(user.avatar_url.as_deref(), Some("https://cdn.example.com/mina.png"));
    assert_eq!(user.role_id, None);

    Ok(())
}

/// Tests that a duplicate username is rejected.
///
/// The unique constraint on username must make the second insert fail
/// instead of creating a second row.
///
/// Expected: Err on the second create
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(CreateUserParams {
        username: "mina".to_string(),
        email: "mina@example.com".to_string(),
        password_hash: "$argon2id$fake-hash".to_string(),
        avatar_url: None,
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            username: "mina".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "$argon2id$fake-hash".to_string(),
            avatar_url: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
