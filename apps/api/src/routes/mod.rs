pub mod health;
pub mod profile;

use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};

use crate::errors::AppError;
use crate::state::AppState;

const WELCOME_MESSAGE: &str = "Welcome to the Profile API";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        .route("/me", get(profile::profile_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

/// GET /
async fn root_handler() -> Json<&'static str> {
    Json(WELCOME_MESSAGE)
}

/// Catch-all for unmatched routes.
async fn not_found_handler() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// UTC timestamp in ISO-8601 with millisecond precision,
/// e.g. `2026-08-06T12:34:56.789Z`.
pub(crate) fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
