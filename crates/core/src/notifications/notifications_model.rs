use serde::Serialize;

use crate::rsvps::Rsvp;
use crate::settings::Settings;

const PLACEHOLDER: &str = "—";

/// A plain-text message ready for a [`MailTransport`](super::MailTransport).
///
/// The sender address belongs to the transport; only the display name is
/// chosen here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from_name: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationOutcome {
    Sent { to: String },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No mail credentials configured.
    NoTransport,
    /// Neither an override nor a coordinator address is set.
    NoRecipient,
}

/// Builds the "new RSVP" message for the coordinator.
pub fn compose_rsvp_email(rsvp: &Rsvp, settings: &Settings, to: &str, site_url: &str) -> OutgoingEmail {
    let (name1, name2) = settings.couple_names();
    let body = format!(
        "New RSVP!\n\nName: {} {}\nEmail: {}\nGuests: {}\nMeal: {}\nSong: {}\n\nDashboard: {}/dashboard.html",
        rsvp.fname,
        rsvp.lname,
        rsvp.email.as_deref().unwrap_or(PLACEHOLDER),
        rsvp.guests,
        rsvp.meal.as_deref().unwrap_or(PLACEHOLDER),
        rsvp.song.as_deref().unwrap_or(PLACEHOLDER),
        site_url.trim_end_matches('/'),
    );

    OutgoingEmail {
        from_name: format!("{} & {} RSVPs 💌", name1, name2),
        to: to.to_string(),
        subject: format!("New RSVP: {} {}", rsvp.fname, rsvp.lname),
        body,
    }
}
