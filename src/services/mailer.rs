//! Mail transport client.
//!
//! A thin wrapper over lettre's async SMTP transport. One delivery attempt
//! per call; auth, network, and rejection failures all propagate to the
//! caller as [`MailError`]. No retry, no backoff.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::Settings;

/// A single outbound plain-text email.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: Mailbox,
    pub to: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sends one email per call. Implementations must not retry internally.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;

    /// Probe the underlying transport. Used by the health endpoint.
    async fn health_check(&self) -> bool;
}

/// Production mailer backed by lettre's async SMTP transport.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the transport from settings: STARTTLS submission with basic
    /// credentials and a connect/IO timeout. The defaults match the
    /// production deployment (smtp.ionos.com:587).
    pub fn new(settings: &Settings) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)?
            .port(settings.smtp_port)
            .credentials(Credentials::new(
                settings.smtp_username.clone(),
                settings.smtp_password.clone(),
            ))
            .timeout(Some(Duration::from_secs(settings.smtp_timeout_seconds)))
            .build();

        tracing::info!(
            host = %settings.smtp_host,
            port = settings.smtp_port,
            "SMTP mailer initialized"
        );

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(email.from)
            .to(email.to)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN);

        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to);
        }

        let message = builder.body(email.body)?;
        self.transport.send(message).await?;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        matches!(self.transport.test_connection().await, Ok(true))
    }
}
