//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data-layer
//! boundary. The pure response projections (user, comment, discussion) also
//! live here so they can be tested without a database.

pub mod comment;
pub mod discussion;
pub mod notification;
pub mod post;
pub mod user;
pub mod vote;
