//! SQLite storage implementation for the wedding site.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `weddingsite-core` and contains:
//! - Database connection pooling and the single-writer actor
//! - Embedded Diesel migrations
//! - Repository implementations for settings and RSVPs
//! - Database-specific model types (with Diesel derives)
//!
//! ```text
//!      core (domain)
//!           │
//!           ▼
//!  storage-sqlite (this crate)
//!           │
//!           ▼
//!       SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod rsvps;
pub mod settings;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use rsvps::RsvpRepository;
pub use settings::SettingsRepository;

// Re-export from weddingsite-core for convenience
pub use weddingsite_core::errors::{DatabaseError, Error, Result};
