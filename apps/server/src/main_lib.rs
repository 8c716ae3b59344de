use std::sync::Arc;

use crate::{auth::AdminGate, config::Config, mailer::SmtpMailTransport};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use weddingsite_core::{
    notifications::{MailTransport, NotificationService, NotificationServiceTrait},
    photos::{PhotoService, PhotoServiceTrait},
    rsvps::{RsvpService, RsvpServiceTrait},
    settings::{SettingsService, SettingsServiceTrait},
};
use weddingsite_storage_sqlite::{
    db::{self, write_actor},
    rsvps::RsvpRepository,
    settings::SettingsRepository,
};

pub struct AppState {
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub rsvp_service: Arc<dyn RsvpServiceTrait>,
    pub photo_service: Arc<dyn PhotoServiceTrait>,
    pub notification_service: Arc<dyn NotificationServiceTrait>,
    pub admin_gate: AdminGate,
}

pub fn init_tracing() {
    let log_format = std::env::var("WEDDING_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer(pool.clone());

    let settings_repo = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));
    let settings_service = Arc::new(SettingsService::new(settings_repo.clone()));
    settings_service.initialize().await?;

    let rsvp_repo = Arc::new(RsvpRepository::new(pool.clone(), writer.clone()));
    let rsvp_service = Arc::new(RsvpService::new(rsvp_repo));
    let photo_service = Arc::new(PhotoService::new(settings_repo));

    let transport: Option<Arc<dyn MailTransport>> = match &config.mail {
        Some(mail) => {
            tracing::info!("RSVP notifications via {} as {}", mail.smtp_host, mail.username);
            Some(Arc::new(SmtpMailTransport::new(mail)?))
        }
        None => {
            tracing::info!("GMAIL_USER / GMAIL_APP_PASSWORD not set, RSVP emails disabled");
            None
        }
    };
    let notification_service = Arc::new(NotificationService::new(
        transport,
        config.notify_email.clone(),
        config.site_url.clone(),
    ));

    let admin_gate = AdminGate::new(config.dashboard_password.clone());
    if !admin_gate.is_configured() {
        tracing::warn!("DASHBOARD_PASSWORD not set, dashboard endpoints will refuse every request");
    }

    Ok(Arc::new(AppState {
        settings_service,
        rsvp_service,
        photo_service,
        notification_service,
        admin_gate,
    }))
}
