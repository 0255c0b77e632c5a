use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Raw contact form fields as posted by the browser.
///
/// Every field defaults so that a missing key surfaces as a validation
/// problem naming the field, rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub facility_name: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub services: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated inquiry: required fields are non-blank and trimmed, the email
/// has the same permissive shape the client script accepts, and blank
/// optional fields are collapsed to `None`.
///
/// Inquiries are ephemeral. One is built per request, consumed by the two
/// outbound emails, and discarded with the response.
#[derive(Debug, Clone)]
pub struct Inquiry {
    pub facility_name: String,
    pub contact_name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub services: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
}

/// Validation failure carrying every problem found, so the error page can
/// name all offending fields at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .problems.join("; "))]
pub struct InvalidInquiry {
    pub problems: Vec<String>,
}

impl ContactForm {
    /// Validate the submission server-side. The client script performs the
    /// same checks before submitting, but those are bypassable.
    pub fn validate(self) -> Result<Inquiry, InvalidInquiry> {
        let mut problems = Vec::new();

        let facility_name = self.facility_name.trim().to_string();
        let contact_name = self.contact_name.trim().to_string();
        let title = self.title.trim().to_string();
        let email = self.email.trim().to_string();

        if facility_name.is_empty() {
            problems.push("Facility name is required".to_string());
        }
        if contact_name.is_empty() {
            problems.push("Contact name is required".to_string());
        }
        if title.is_empty() {
            problems.push("Title is required".to_string());
        }
        if email.is_empty() {
            problems.push("Email is required".to_string());
        } else if !email_regex().is_match(&email) {
            problems.push("Email address is not valid".to_string());
        }

        if !problems.is_empty() {
            return Err(InvalidInquiry { problems });
        }

        Ok(Inquiry {
            facility_name,
            contact_name,
            title,
            email,
            phone: normalize_optional(self.phone),
            services: normalize_optional(self.services),
            timeline: normalize_optional(self.timeline),
            message: normalize_optional(self.message),
        })
    }
}

/// Trim an optional field and collapse blank values to `None`.
fn normalize_optional(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Permissive email shape check matching the client-side pattern
/// (`/^[^\s@]+@[^\s@]+\.[^\s@]+$/`).
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}
