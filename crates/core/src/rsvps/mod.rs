//! RSVPs module - domain models, services, and traits.

mod rsvps_model;
mod rsvps_service;
mod rsvps_traits;

pub use rsvps_model::{
    parse_guest_count, MealCount, NewRsvp, Rsvp, RsvpStats, RsvpSubmission,
};
pub use rsvps_service::RsvpService;
pub use rsvps_traits::{RsvpRepositoryTrait, RsvpServiceTrait};
