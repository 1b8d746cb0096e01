use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{error, info};

use crate::models::user::UserProfile;
use crate::routes::iso_timestamp;
use crate::state::AppState;

/// Served in place of a fresh fact whenever the upstream fetch fails.
pub const FALLBACK_FACT: &str =
    "Cat fact temporarily unavailable. Did you know cats spend 70% of their lives sleeping?";

const FETCH_FAILED_MESSAGE: &str = "Unable to fetch cat fact from external API";

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub status: &'static str,
    pub user: UserProfile,
    pub timestamp: String,
    pub fact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// GET /me
///
/// Always answers with the full envelope: a fresh fact on success, the
/// fallback fact plus a generic error message on any fetch failure. The
/// underlying failure is logged, never returned to the caller.
pub async fn profile_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ProfileResponse>) {
    let timestamp = iso_timestamp();

    match state.facts.fetch_fact().await {
        Ok(fact) => {
            info!(method = "GET", path = "/me", "profile served with fresh fact");
            (
                StatusCode::OK,
                Json(ProfileResponse {
                    status: "success",
                    user: state.profile.clone(),
                    timestamp,
                    fact,
                    error: None,
                }),
            )
        }
        Err(e) => {
            error!(method = "GET", path = "/me", "fact fetch failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProfileResponse {
                    status: "error",
                    user: state.profile.clone(),
                    timestamp,
                    fact: FALLBACK_FACT.to_string(),
                    error: Some(FETCH_FAILED_MESSAGE),
                }),
            )
        }
    }
}
