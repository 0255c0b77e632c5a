mod app;
mod config;
mod domain;
mod error;
mod logging;
mod middleware;
mod routes;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use services::{Mailer, RateLimiter, SmtpMailer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting MDS Staffing website"
    );

    // Create SMTP mailer
    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&settings)?);

    // Optionally probe the relay (non-blocking)
    tokio::spawn({
        let mailer = mailer.clone();
        async move {
            if mailer.health_check().await {
                tracing::info!("SMTP relay is reachable");
            } else {
                tracing::warn!("SMTP relay probe failed - will retry on first submission");
            }
        }
    });

    // Contact form rate limiter
    let rate_limiter = RateLimiter::new(
        settings.contact_rate_limit,
        Duration::from_secs(settings.contact_rate_window_seconds),
    );

    // Create application state
    let state = app::AppState::new(settings.clone(), mailer, rate_limiter);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
