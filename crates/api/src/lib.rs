//! # TalentSync API
//!
//! The API crate provides the web server behind the recruiting portal's e-mail
//! notifications. It renders the fixed template catalog for each recipient and
//! hands the result to a [`mailer::Mailer`].
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate payloads and render templates
//! - **Mailer**: The delivery seam; the default implementation only logs
//! - **Middleware**: Error mapping to HTTP responses
//! - **Config**: Environment driven server settings

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Outbound e-mail delivery
pub mod mailer;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, Router};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::mailer::Mailer;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Delivers rendered e-mails
    pub mailer: Arc<dyn Mailer>,
    /// `From` address stamped on every outgoing e-mail
    pub sender: String,
}

impl ApiState {
    pub fn new(mailer: Arc<dyn Mailer>, sender: impl Into<String>) -> Self {
        Self {
            mailer,
            sender: sender.into(),
        }
    }
}

/// Builds the application router with all routes attached to `state`.
///
/// Kept separate from [`start_server`] so tests can drive the router directly.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // E-mail dispatch and template preview
        .merge(routes::email::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and mailer
///
/// This function initializes logging, configures routes and layers, and
/// serves until the listener fails.
///
/// # Example
///
/// ```ignore
/// let config = ApiConfig::from_env()?;
/// start_server(config, Arc::new(TracingMailer)).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, mailer: Arc<dyn Mailer>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(mailer, config.email_sender.clone()));
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(allowed)
        .allow_credentials(true)
}
