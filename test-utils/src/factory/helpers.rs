//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// identifying values to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a discussion with its author and post.
///
/// Convenience method that creates:
/// 1. User (as post author)
/// 2. Post
/// 3. ProConDiscussion extension
///
/// No initial vote is cast; seed votes with `VoteFactory` where a test
/// needs them.
///
/// # Returns
/// - `Ok((user, post, discussion))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_discussion_with_author(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::post::Model,
        entity::pro_con_discussion::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, user.id).await?;
    let discussion = crate::factory::discussion::create_discussion(db, post.id).await?;

    Ok((user, post, discussion))
}
