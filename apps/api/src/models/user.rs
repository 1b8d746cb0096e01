use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Static user metadata returned by `/me`. Built once from config at startup
/// and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub stack: String,
}

impl UserProfile {
    pub fn from_config(config: &Config) -> Self {
        Self {
            email: config.user_email.clone(),
            name: config.user_name.clone(),
            stack: config.user_stack.clone(),
        }
    }
}
