//! User Registry - A uid-keyed user lookup service
//!
//! This crate provides a small layered CRUD module for user records:
//! a relational `users` table with a store-assigned surrogate key and a
//! unique external `uid`, a repository for typed lookups, and generic
//! response envelopes for callers that serialize results to a wire format.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **types**: Shared types (response envelopes)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Show migration status
//! cargo run -- migrate status
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{CreateUser, User};
pub use errors::{AppError, AppResult};
pub use types::{ApiResponse, ListResult};
