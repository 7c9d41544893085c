//! Comment operations: creation, viewer-aware listing, and reaction toggles.

use sea_orm::DatabaseConnection;

use crate::{
    model::comment::CommentDto,
    server::{
        data::{
            comment::CommentRepository, discussion::ProConDiscussionRepository,
            notification::NotificationRepository, post::PostRepository,
        },
        error::AppError,
        model::{
            comment::{project_comment, CommentWithReactions},
            user::User,
        },
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment on a discussion post.
    ///
    /// Commenting on another user's discussion records a notification for
    /// the post author.
    ///
    /// # Returns
    /// - `Ok(CommentDto)` - The fresh comment projected for its author
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::BadRequest)` - The post is not a pro/con discussion
    pub async fn create(
        &self,
        post_id: i32,
        author: &User,
        content: String,
    ) -> Result<CommentDto, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

        ProConDiscussionRepository::new(self.db)
            .find_by_post_id(post_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest("Post is not a pro/con discussion".to_string())
            })?;

        let comment = CommentRepository::new(self.db)
            .create(post_id, author.id, content)
            .await?;

        if post.author_id != author.id {
            NotificationRepository::new(self.db)
                .create(
                    post.author_id,
                    format!(
                        "{} commented on your discussion \"{}\"",
                        author.username, post.title
                    ),
                )
                .await?;
        }

        // A fresh comment has no reactions yet; project it directly instead
        // of re-reading the thread.
        let with_reactions = CommentWithReactions {
            id: comment.id,
            author: author.username.clone(),
            content: comment.content,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            likes: Vec::new(),
            dislikes: Vec::new(),
        };

        Ok(project_comment(&with_reactions, Some(author.id)))
    }

    /// Gets a discussion's comments in creation order, projected for the
    /// viewer (anonymous viewers report no reactions of their own).
    pub async fn find_all_by_post(
        &self,
        post_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<CommentDto>, AppError> {
        PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

        let comments = CommentRepository::new(self.db)
            .find_by_post_with_reactions(post_id)
            .await?;

        Ok(comments
            .iter()
            .map(|comment| project_comment(comment, viewer_id))
            .collect())
    }

    /// Toggles the user's like on a comment.
    ///
    /// A first like inserts the reaction and clears any dislike by the same
    /// user; a repeated like removes it. At most one like and one dislike
    /// per (comment, user) exist throughout.
    pub async fn like(&self, comment_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        repo.find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", comment_id)))?;

        if let Some(existing) = repo.find_like(comment_id, user_id).await? {
            repo.delete_like(existing.id).await?;
            return Ok(());
        }

        if let Some(opposite) = repo.find_dislike(comment_id, user_id).await? {
            repo.delete_dislike(opposite.id).await?;
        }
        repo.create_like(comment_id, user_id).await?;

        Ok(())
    }

    /// Toggles the user's dislike on a comment; mirror of `like`.
    pub async fn dislike(&self, comment_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        repo.find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", comment_id)))?;

        if let Some(existing) = repo.find_dislike(comment_id, user_id).await? {
            repo.delete_dislike(existing.id).await?;
            return Ok(());
        }

        if let Some(opposite) = repo.find_like(comment_id, user_id).await? {
            repo.delete_like(opposite.id).await?;
        }
        repo.create_dislike(comment_id, user_id).await?;

        Ok(())
    }
}
