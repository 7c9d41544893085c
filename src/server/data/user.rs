//! User data repository.
//!
//! Handles user creation and lookups with conversion between entity models
//! and domain models at the infrastructure boundary. The password hash is
//! exposed through exactly one method, for login verification.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::{CreateUserParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user from parameters.
    ///
    /// Username and email uniqueness is enforced by database constraints;
    /// a duplicate surfaces as `DbErr` and is translated by the service.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Constraint violation or database error
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            avatar_url: ActiveValue::Set(param.avatar_url),
            role_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by username, returning the stored password hash
    /// alongside the domain model.
    ///
    /// Only the login path calls this; everything else works with the
    /// credential-free domain model.
    pub async fn find_by_username_with_password(
        &self,
        username: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password.clone();
            (User::from_entity(e), hash)
        }))
    }

    /// Finds a user together with their role name, if any.
    ///
    /// # Returns
    /// - `Ok(Some((user, role_name)))` - User found; `role_name` is `None`
    ///   when the user carries no role
    /// - `Ok(None)` - No user with that id
    pub async fn find_with_role(
        &self,
        user_id: i32,
    ) -> Result<Option<(User, Option<String>)>, DbErr> {
        let result = entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await?;

        Ok(result.map(|(user, role)| (User::from_entity(user), role.map(|r| r.name))))
    }
}
