//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the discussion
//! board, including API endpoints, business logic, data access, and
//! infrastructure services. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, session checks, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameter types, and pure projections
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the authentication guard
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Controller** resolves the session viewer, converts DTOs to params, calls a service
//! 3. **Service** executes business logic, orchestrates repositories
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the result to a DTO and returns the HTTP response
//!
//! Vote tallies and first-voter names are recomputed on every read path; no
//! component retains state across requests.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
