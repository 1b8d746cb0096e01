use crate::fact_client::FactClient;
use crate::models::user::UserProfile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub facts: FactClient,
    /// Static user metadata served by `/me`, read once from config at startup.
    pub profile: UserProfile,
}
