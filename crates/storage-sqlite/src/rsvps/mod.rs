//! SQLite storage implementation for RSVPs.

mod model;
mod repository;

pub use model::{NewRsvpDB, RsvpDB};
pub use repository::RsvpRepository;

// Re-export trait from core for convenience
pub use weddingsite_core::rsvps::RsvpRepositoryTrait;
