use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::notifications_model::{
    compose_rsvp_email, NotificationOutcome, OutgoingEmail, SkipReason,
};
use crate::errors::Result;
use crate::rsvps::Rsvp;
use crate::settings::Settings;

/// Delivers a composed message. Implemented by the server over SMTP.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<()>;
}

#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    /// Tells the coordinator about a new RSVP, or skips quietly when mail
    /// is not configured.
    async fn notify_new_rsvp(&self, rsvp: &Rsvp, settings: &Settings)
        -> Result<NotificationOutcome>;
}

pub struct NotificationService {
    transport: Option<Arc<dyn MailTransport>>,
    recipient_override: Option<String>,
    site_url: String,
}

impl NotificationService {
    pub fn new(
        transport: Option<Arc<dyn MailTransport>>,
        recipient_override: Option<String>,
        site_url: impl Into<String>,
    ) -> Self {
        NotificationService {
            transport,
            recipient_override: recipient_override
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            site_url: site_url.into(),
        }
    }

    fn resolve_recipient(&self, settings: &Settings) -> Option<String> {
        self.recipient_override
            .clone()
            .or_else(|| settings.coordinator_email().map(str::to_string))
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn notify_new_rsvp(
        &self,
        rsvp: &Rsvp,
        settings: &Settings,
    ) -> Result<NotificationOutcome> {
        let Some(transport) = self.transport.as_ref() else {
            debug!("Mail not configured, skipping notification for RSVP {}", rsvp.id);
            return Ok(NotificationOutcome::Skipped(SkipReason::NoTransport));
        };
        let Some(to) = self.resolve_recipient(settings) else {
            debug!("No coordinator address, skipping notification for RSVP {}", rsvp.id);
            return Ok(NotificationOutcome::Skipped(SkipReason::NoRecipient));
        };

        let email = compose_rsvp_email(rsvp, settings, &to, &self.site_url);
        transport.send(email).await?;
        info!("RSVP {} notification sent to {}", rsvp.id, to);
        Ok(NotificationOutcome::Sent { to })
    }
}
