//! Request and response DTOs shared with the transport layer.

pub mod api;
pub mod comment;
pub mod discussion;
pub mod notification;
pub mod user;
