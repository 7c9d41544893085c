//! HTTP request handlers.
//!
//! Controllers resolve the session viewer, convert DTOs to operation
//! parameters, call a service, and shape the HTTP response. Each handler
//! carries a utoipa annotation for the generated OpenAPI document.

pub mod auth;
pub mod comment;
pub mod discussion;
pub mod notification;
pub mod user;
