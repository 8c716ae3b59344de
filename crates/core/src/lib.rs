//! Weddingsite Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for the wedding site backend:
//! the settings store and its defaults, the guest RSVP collection, photo
//! slots, new-RSVP notifications and CSV export. It is database-agnostic and
//! defines traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod export;
pub mod notifications;
pub mod photos;
pub mod rsvps;
pub mod settings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
