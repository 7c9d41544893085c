//! Generic post removal collaborator.

use sea_orm::DatabaseConnection;

use crate::server::{data::post::PostRepository, error::AppError};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Removes a post. FK cascades at the persistence layer clean up any
    /// attached discussion, votes, comments, and reactions.
    ///
    /// # Returns
    /// - `Ok(())` - Post deleted
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn remove(&self, post_id: i32) -> Result<(), AppError> {
        let repo = PostRepository::new(self.db);

        let deleted = repo.delete(post_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Post {} not found", post_id)));
        }

        Ok(())
    }
}
