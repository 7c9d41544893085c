//! User domain model and public response projection.

use chrono::{DateTime, Utc};

use crate::model::user::UserResponseDto;

/// User account without the password credential.
///
/// The hash never leaves the data layer except through
/// `UserRepository::find_by_username_with_password` for login verification.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub role_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to the domain model at the repository
    /// boundary, dropping the password column.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            avatar_url: entity.avatar_url,
            role_id: entity.role_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Produces the public response projection.
    ///
    /// # Arguments
    /// - `role_name` - Name of the user's role; `None` collapses to an empty
    ///   string in the response
    pub fn into_response(self, role_name: Option<String>) -> UserResponseDto {
        UserResponseDto {
            username: self.username,
            avatar_url: self.avatar_url,
            email: self.email,
            role: role_name.unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new user.
///
/// The password arrives already hashed; the service layer owns hashing so
/// the repository never sees the cleartext credential.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
}
