use anyhow::Context;
use std::{net::SocketAddr, time::Duration};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// SMTP credentials; present only when both user and app password are set.
#[derive(Clone, Debug)]
pub struct MailConfig {
    pub username: String,
    pub password: String,
    pub smtp_host: String,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    /// Shared dashboard secret. `None` refuses every admin request.
    pub dashboard_password: Option<String>,
    pub mail: Option<MailConfig>,
    pub notify_email: Option<String>,
    pub site_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let raw_addr = match (env_opt("WEDDING_LISTEN_ADDR"), env_opt("PORT")) {
            (Some(addr), _) => addr,
            (None, Some(port)) => format!("0.0.0.0:{}", port),
            (None, None) => DEFAULT_LISTEN_ADDR.to_string(),
        };
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("Invalid listen address '{}'", raw_addr))?;

        let db_path = env_opt("DATABASE_URL").unwrap_or_else(|| "./db/wedding.db".into());

        let mail = match (env_opt("GMAIL_USER"), env_opt("GMAIL_APP_PASSWORD")) {
            (Some(username), Some(password)) => Some(MailConfig {
                username,
                password,
                smtp_host: env_opt("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.into()),
            }),
            _ => None,
        };

        let cors_allow = env_opt("WEDDING_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_opt("WEDDING_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30000);

        Ok(Self {
            listen_addr,
            db_path,
            dashboard_password: env_secret("DASHBOARD_PASSWORD"),
            mail,
            notify_email: env_opt("NOTIFY_EMAIL"),
            site_url: env_opt("SITE_URL").unwrap_or_default(),
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir: env_opt("WEDDING_STATIC_DIR").unwrap_or_else(|| "public".into()),
        })
    }
}

/// Reads a variable, treating blank values as unset.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads a secret verbatim; surrounding spaces are part of the value.
fn env_secret(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
