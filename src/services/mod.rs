//! Service layer modules for external integrations.
//!
//! Contains the SMTP mail transport, the contact-flow message builders, and
//! the per-source rate limiter.

pub mod mailer;
pub mod messages;
pub mod rate_limit;

pub use mailer::{MailError, Mailer, OutboundEmail, SmtpMailer};
pub use messages::{confirmation_email, notification_email};
pub use rate_limit::{RateLimitDecision, RateLimiter};
