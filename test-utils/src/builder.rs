use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context with an in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Role, User};
///
/// let test = TestBuilder::new()
///     .with_table(Role)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models. Executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for discussion operations.
    ///
    /// Adds Role, User, Post, ProConDiscussion, and ProConVote in dependency
    /// order. For tests that also touch comments or notifications, use
    /// `with_board_tables()`.
    pub fn with_discussion_tables(self) -> Self {
        self.with_table(Role)
            .with_table(User)
            .with_table(Post)
            .with_table(ProConDiscussion)
            .with_table(ProConVote)
    }

    /// Adds every table of the board schema.
    ///
    /// Equivalent to `with_discussion_tables()` plus Comment, CommentLike,
    /// CommentDislike, and Notification.
    pub fn with_board_tables(self) -> Self {
        self.with_discussion_tables()
            .with_table(Comment)
            .with_table(CommentLike)
            .with_table(CommentDislike)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
