//! Telemetr-a orchestrator - user registry HTTP service
//!
//! Exposes a status endpoint and two user endpoints (list, create)
//! over a single relational `users` table managed through SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities
//! - **services**: Application use cases
//! - **infra**: Database pool, migrations and repositories
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on 0.0.0.0:8000
//! cargo run
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{NewUser, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
