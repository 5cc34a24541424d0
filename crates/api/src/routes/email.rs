use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/google/send-emails", post(handlers::email::send_emails))
        .route(
            "/api/templates/:name/preview",
            post(handlers::email::preview_template),
        )
}
