//! Contact form submission handler.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, State},
    response::Redirect,
    Form,
};
use chrono::Utc;

use crate::app::AppState;
use crate::domain::{ContactForm, Inquiry};
use crate::error::{SiteError, SiteResult};
use crate::services::{self, MailError, RateLimitDecision};

/// Handle a contact form submission.
///
/// The order is fixed: rate limit, validate, send the notification, then the
/// confirmation. The confirmation is only attempted once the notification has
/// been accepted, and a confirmation failure does not fail the request.
pub async fn submit_inquiry(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Form(form): Form<ContactForm>,
) -> SiteResult<Redirect> {
    if let RateLimitDecision::Limited { retry_after } = state.rate_limiter.check(addr.ip()) {
        return Err(SiteError::RateLimited { retry_after });
    }

    let inquiry = form.validate()?;
    let submitted_at = Utc::now();

    let notification = services::notification_email(&state.settings, &inquiry, submitted_at)?;
    state.mailer.send(notification).await?;

    tracing::info!(
        facility = %inquiry.facility_name,
        source = %addr.ip(),
        "Inquiry notification delivered"
    );

    // The inquiry has already reached the team at this point; the visitor
    // still lands on the thank-you page if their copy cannot be sent.
    if let Err(e) = send_confirmation(&state, &inquiry).await {
        tracing::warn!(
            error = ?e,
            email = %inquiry.email,
            "Confirmation email failed after notification was delivered"
        );
    }

    Ok(Redirect::to("/thank-you"))
}

async fn send_confirmation(state: &AppState, inquiry: &Inquiry) -> Result<(), MailError> {
    let confirmation = services::confirmation_email(&state.settings, inquiry)?;
    state.mailer.send(confirmation).await
}
