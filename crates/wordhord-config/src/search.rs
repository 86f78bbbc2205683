use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct SearchConfig {
    /// Cap on the body-text branch of a search; form and modern-English
    /// matches are never truncated.
    pub candidate_limit: u32,
}

impl SearchConfig {
    pub fn new() -> Self {
        let candidate_limit = env::var("WORDHORD_CANDIDATE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        SearchConfig { candidate_limit }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
