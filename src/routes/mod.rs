pub mod contact;
pub mod health;

use axum::{routing::get, routing::post, Router};
use std::path::Path;
use std::sync::Arc;

use tower_http::services::{ServeDir, ServeFile};

use crate::app::AppState;
use crate::config::Settings;

/// Build the site router with all routes
///
/// The landing and thank-you pages are explicit routes; everything else under
/// the static directory (stylesheets, scripts, images) is served by the
/// fallback.
pub fn site_router(settings: &Settings) -> Router<Arc<AppState>> {
    let static_dir = Path::new(&settings.static_dir);

    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        .route("/contact", post(contact::submit_inquiry))
        // Pages
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/thank-you", ServeFile::new(static_dir.join("thank-you.html")))
        // Assets
        .fallback_service(ServeDir::new(static_dir))
}
