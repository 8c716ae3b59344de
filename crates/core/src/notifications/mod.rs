//! Email notice to the coordinator when a guest responds.

mod notifications_model;
mod notifications_service;

pub use notifications_model::{
    compose_rsvp_email, NotificationOutcome, OutgoingEmail, SkipReason,
};
pub use notifications_service::{MailTransport, NotificationService, NotificationServiceTrait};
