//! Unified error handling for the site.
//!
//! Every failure surfaced to a visitor renders a small HTML page with a way
//! back to the form.

#![allow(dead_code)]

use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::InvalidInquiry;
use crate::services::MailError;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid submission: {0}")]
    Validation(#[from] InvalidInquiry),

    #[error("too many contact form submissions")]
    RateLimited { retry_after: Duration },

    #[error("delivery failure")]
    Delivery(#[from] MailError),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl SiteError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Delivery(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn page(&self) -> Html<String> {
        match self {
            Self::Validation(invalid) => {
                let items: String = invalid
                    .problems
                    .iter()
                    .map(|p| format!("<li>{p}</li>"))
                    .collect();
                render_page(
                    "Invalid Submission",
                    format!("<p>Please correct the following and try again:</p><ul>{items}</ul>"),
                )
            }
            Self::RateLimited { .. } => render_page(
                "Too Many Requests",
                "<p>Too many contact form submissions, please try again later.</p>".to_string(),
            ),
            // Don't leak transport or internal details to the visitor
            Self::Delivery(_) | Self::Internal(_) => render_page(
                "Error",
                "<p>Sorry, there was an error sending your message. \
                 Please try again or contact us directly.</p>"
                    .to_string(),
            ),
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        match &self {
            Self::Delivery(e) => {
                tracing::error!(error = ?e, "Mail delivery failed");
            }
            Self::Internal(e) => {
                tracing::error!(error = ?e, "Internal server error");
            }
            _ => {
                tracing::warn!(error = %self, "Request rejected");
            }
        }

        let status = self.status_code();
        if let Self::RateLimited { retry_after } = &self {
            let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            return (
                status,
                [(header::RETRY_AFTER, secs.to_string())],
                self.page(),
            )
                .into_response();
        }

        (status, self.page()).into_response()
    }
}

fn render_page(heading: &str, body_html: String) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{heading} | MDS Staffing</title></head>\n\
         <body>\n\
         <h1>{heading}</h1>\n\
         {body_html}\n\
         <p><a href=\"/\">Go Back</a></p>\n\
         </body>\n\
         </html>\n"
    ))
}

pub type SiteResult<T> = Result<T, SiteError>;
