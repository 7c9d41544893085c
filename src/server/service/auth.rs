//! Credential verification for the session login flow.

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username/password pair.
    ///
    /// Unknown usernames and wrong passwords answer the same error so the
    /// response never reveals which one failed.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or bad password
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some((user, stored_hash)) = repo.find_by_username_with_password(username).await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let parsed = PasswordHash::new(&stored_hash).map_err(|e| {
            AppError::InternalError(format!("Stored password hash is malformed: {}", e))
        })?;

        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
