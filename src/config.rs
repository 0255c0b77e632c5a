use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    #[allow(dead_code)]
    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // SMTP transport
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_timeout_seconds: u64,

    // Mail routing
    pub mail_from: String,
    pub contact_recipient: String,

    // Static site
    pub static_dir: String,

    // Contact form rate limit
    pub contact_rate_limit: u32,
    pub contact_rate_window_seconds: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        // SMTP transport
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.ionos.com".to_string());
        let smtp_port = env::var("SMTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(587);
        let smtp_username = env::var("SMTP_USERNAME").context("SMTP_USERNAME must be set")?;
        let smtp_password = env::var("SMTP_PASSWORD").context("SMTP_PASSWORD must be set")?;
        let smtp_timeout_seconds = env::var("SMTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        // Mail routing. The envelope sender defaults to the SMTP account,
        // the notification inbox to the business support address.
        let mail_from = env::var("MAIL_FROM").unwrap_or_else(|_| smtp_username.clone());
        let contact_recipient = env::var("CONTACT_RECIPIENT")
            .unwrap_or_else(|_| "support@mds-staffing.com".to_string());

        // Static site
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        // Contact form rate limit
        let contact_rate_limit = env::var("CONTACT_RATE_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        let contact_rate_window_seconds = env::var("CONTACT_RATE_WINDOW_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(900); // 15 minutes

        Ok(Settings {
            env,
            server_addr,
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            smtp_timeout_seconds,
            mail_from,
            contact_recipient,
            static_dir,
            contact_rate_limit,
            contact_rate_window_seconds,
        })
    }
}
