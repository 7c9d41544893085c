//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in
//! the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separated from business
//! logic. All queries, inserts, updates, and deletes go through these
//! repositories.

pub mod comment;
pub mod discussion;
pub mod notification;
pub mod post;
pub mod user;
pub mod vote;

#[cfg(test)]
mod test;
