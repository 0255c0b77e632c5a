//! Builders for the two contact-flow emails.
//!
//! The notification goes to the staffing team with every submitted field;
//! the confirmation goes back to the submitter. Both are plain text.

use chrono::{DateTime, Utc};
use lettre::message::Mailbox;
use lettre::Address;

use crate::config::Settings;
use crate::domain::Inquiry;
use crate::services::mailer::{MailError, OutboundEmail};

/// Internal notification about a new inquiry, addressed to the configured
/// recipient with the submitter set as reply-to.
pub fn notification_email(
    settings: &Settings,
    inquiry: &Inquiry,
    submitted_at: DateTime<Utc>,
) -> Result<OutboundEmail, MailError> {
    let from: Mailbox = settings.mail_from.parse()?;
    let to: Mailbox = settings.contact_recipient.parse()?;

    let phone = inquiry.phone.as_deref().unwrap_or("Not provided");
    let services = inquiry.services.as_deref().unwrap_or("Not specified");
    let timeline = inquiry.timeline.as_deref().unwrap_or("Not specified");
    let message = inquiry.message.as_deref().unwrap_or("No additional message");

    let body = format!(
        "New MDS Staffing Consultation Request\n\
         \n\
         Facility Information:\n\
         \u{2022} Facility Name: {facility}\n\
         \u{2022} Contact Person: {contact}\n\
         \u{2022} Title/Role: {title}\n\
         \n\
         Contact Details:\n\
         \u{2022} Email: {email}\n\
         \u{2022} Phone: {phone}\n\
         \n\
         Service Requirements:\n\
         \u{2022} Services Needed: {services}\n\
         \u{2022} Timeline: {timeline}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         ---\n\
         Submitted: {submitted}\n",
        facility = inquiry.facility_name,
        contact = inquiry.contact_name,
        title = inquiry.title,
        email = inquiry.email,
        phone = phone,
        services = services,
        timeline = timeline,
        message = message,
        submitted = submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    Ok(OutboundEmail {
        from,
        to,
        reply_to: submitter_mailbox(inquiry),
        subject: format!(
            "New Inquiry from {} - {}",
            inquiry.facility_name, inquiry.contact_name
        ),
        body,
    })
}

/// Confirmation sent back to the submitter after the notification has been
/// accepted by the relay.
pub fn confirmation_email(
    settings: &Settings,
    inquiry: &Inquiry,
) -> Result<OutboundEmail, MailError> {
    let from: Mailbox = settings.mail_from.parse()?;
    let address: Address = inquiry.email.parse()?;
    let to = Mailbox::new(Some(inquiry.contact_name.clone()), address);

    let body = format!(
        "Dear {contact},\n\
         \n\
         Thank you for reaching out to MDS Staffing regarding services for {facility}.\n\
         \n\
         I have received your inquiry and will respond within 24 hours with \
         information about how we can help meet your MDS assessment needs.\n\
         \n\
         In the meantime, if you have any urgent questions, please don't hesitate to call.\n\
         \n\
         Best regards,\n\
         MDS Staffing Team\n\
         \n\
         ---\n\
         This is an automated confirmation email.\n",
        contact = inquiry.contact_name,
        facility = inquiry.facility_name,
    );

    Ok(OutboundEmail {
        from,
        to,
        reply_to: None,
        subject: "Thank you for your MDS Staffing inquiry".to_string(),
        body,
    })
}

/// The submitter as a mailbox, if their address survives strict parsing.
/// The notification still goes out without a reply-to when it does not.
fn submitter_mailbox(inquiry: &Inquiry) -> Option<Mailbox> {
    let address: Address = inquiry.email.parse().ok()?;
    Some(Mailbox::new(Some(inquiry.contact_name.clone()), address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, Settings};
    use crate::domain::Inquiry;

    fn settings() -> Settings {
        Settings {
            env: Environment::Dev,
            server_addr: "127.0.0.1:3000".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            smtp_username: "mailer@example.com".to_string(),
            smtp_password: "secret".to_string(),
            smtp_timeout_seconds: 30,
            mail_from: "mailer@example.com".to_string(),
            contact_recipient: "team@example.com".to_string(),
            static_dir: "public".to_string(),
            contact_rate_limit: 5,
            contact_rate_window_seconds: 900,
        }
    }

    fn inquiry() -> Inquiry {
        Inquiry {
            facility_name: "Sunrise Care Center".to_string(),
            contact_name: "Pat Morgan".to_string(),
            title: "Director of Nursing".to_string(),
            email: "pat.morgan@sunrise.example".to_string(),
            phone: Some("555-0142".to_string()),
            services: Some("Full MDS Management".to_string()),
            timeline: Some("Immediate".to_string()),
            message: Some("We need coverage starting next month.".to_string()),
        }
    }

    #[test]
    fn notification_carries_every_field() {
        let email = notification_email(&settings(), &inquiry(), Utc::now()).unwrap();

        assert_eq!(email.to.email.to_string(), "team@example.com");
        assert_eq!(
            email.subject,
            "New Inquiry from Sunrise Care Center - Pat Morgan"
        );
        for expected in [
            "Sunrise Care Center",
            "Pat Morgan",
            "Director of Nursing",
            "pat.morgan@sunrise.example",
            "555-0142",
            "Full MDS Management",
            "Immediate",
            "We need coverage starting next month.",
        ] {
            assert!(email.body.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn notification_replies_to_the_submitter() {
        let email = notification_email(&settings(), &inquiry(), Utc::now()).unwrap();

        let reply_to = email.reply_to.expect("reply-to should be set");
        assert_eq!(reply_to.email.to_string(), "pat.morgan@sunrise.example");
        assert_eq!(reply_to.name.as_deref(), Some("Pat Morgan"));
    }

    #[test]
    fn notification_fills_placeholders_for_omitted_fields() {
        let mut bare = inquiry();
        bare.phone = None;
        bare.services = None;
        bare.timeline = None;
        bare.message = None;

        let email = notification_email(&settings(), &bare, Utc::now()).unwrap();

        assert!(email.body.contains("Phone: Not provided"));
        assert!(email.body.contains("Services Needed: Not specified"));
        assert!(email.body.contains("Timeline: Not specified"));
        assert!(email.body.contains("No additional message"));
    }

    #[test]
    fn confirmation_is_addressed_to_the_submitter() {
        let email = confirmation_email(&settings(), &inquiry()).unwrap();

        assert_eq!(email.to.email.to_string(), "pat.morgan@sunrise.example");
        assert_eq!(email.subject, "Thank you for your MDS Staffing inquiry");
        assert!(email.body.contains("Dear Pat Morgan"));
        assert!(email.body.contains("Sunrise Care Center"));
    }
}
