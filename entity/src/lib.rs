//! SeaORM entity models for the debateboard database schema.
//!
//! One module per table. Entities stay free of business logic; domain models
//! in the server crate convert from these at the repository boundary.

pub mod comment;
pub mod comment_dislike;
pub mod comment_like;
pub mod notification;
pub mod post;
pub mod pro_con_discussion;
pub mod pro_con_vote;
pub mod role;
pub mod user;

pub mod prelude;
