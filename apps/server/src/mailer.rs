//! SMTP delivery for coordinator notifications.

use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use weddingsite_core::errors::{Error as CoreError, Result as CoreResult};
use weddingsite_core::notifications::{MailTransport, OutgoingEmail};

use crate::config::MailConfig;

pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    sender: Address,
}

impl SmtpMailTransport {
    pub fn new(config: &MailConfig) -> anyhow::Result<Self> {
        let sender: Address = config
            .username
            .parse()
            .with_context(|| format!("GMAIL_USER '{}' is not an email address", config.username))?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .with_context(|| format!("Cannot configure SMTP relay {}", config.smtp_host))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self { mailer, sender })
    }
}

fn build_message(sender: &Address, email: OutgoingEmail) -> CoreResult<Message> {
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| CoreError::Notification(format!("invalid recipient '{}': {}", email.to, e)))?;
    Message::builder()
        .from(Mailbox::new(Some(email.from_name), sender.clone()))
        .to(to)
        .subject(email.subject)
        .header(ContentType::TEXT_PLAIN)
        .body(email.body)
        .map_err(|e| CoreError::Notification(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, email: OutgoingEmail) -> CoreResult<()> {
        let message = build_message(&self.sender, email)?;
        self.mailer
            .send(message)
            .await
            .map_err(|e| CoreError::Notification(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            from_name: "Sam & Alex RSVPs 💌".into(),
            to: to.into(),
            subject: "New RSVP: Ana Lee".into(),
            body: "New RSVP!".into(),
        }
    }

    #[test]
    fn message_uses_display_name_and_sender() {
        let sender: Address = "couple@example.com".parse().unwrap();
        let message = build_message(&sender, email("plan@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("couple@example.com"));
        assert!(raw.contains("To: plan@example.com"));
        assert!(raw.contains("Subject: New RSVP: Ana Lee"));
    }

    #[test]
    fn bad_recipient_is_a_notification_error() {
        let sender: Address = "couple@example.com".parse().unwrap();
        let err = build_message(&sender, email("not an address")).unwrap_err();
        assert!(matches!(err, CoreError::Notification(_)));
    }

    #[test]
    fn new_rejects_non_address_user() {
        let config = MailConfig {
            username: "nobody".into(),
            password: "pw".into(),
            smtp_host: "smtp.example.com".into(),
        };
        assert!(SmtpMailTransport::new(&config).is_err());
    }
}
