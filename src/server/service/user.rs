//! User registration and profile projection.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{CreateUserDto, UserResponseDto},
    server::{data::user::UserRepository, error::AppError, model::user::CreateUserParams},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// The password is hashed with argon2 before it reaches the repository;
    /// the cleartext never touches the database.
    ///
    /// # Returns
    /// - `Ok(UserResponseDto)` - Public projection of the created user
    /// - `Err(AppError::BadRequest)` - Username or email already taken
    pub async fn register(&self, dto: CreateUserDto) -> Result<UserResponseDto, AppError> {
        let repo = UserRepository::new(self.db);

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(dto.password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?
            .to_string();

        let result = repo
            .create(CreateUserParams {
                username: dto.username,
                email: dto.email,
                password_hash,
                avatar_url: dto.avatar_url,
            })
            .await;

        match result {
            Ok(user) => Ok(user.into_response(None)),
            Err(err) => {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    Err(AppError::BadRequest(
                        "Username or email already in use".to_string(),
                    ))
                } else {
                    Err(err.into())
                }
            }
        }
    }

    /// Gets a user's public profile, role name included.
    pub async fn get_profile(&self, user_id: i32) -> Result<UserResponseDto, AppError> {
        let repo = UserRepository::new(self.db);

        let (user, role_name) = repo
            .find_with_role(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(user.into_response(role_name))
    }
}
