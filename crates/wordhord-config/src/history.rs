use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct HistoryConfig {
    /// Path to the viewed-terms database.
    pub path: PathBuf,
    /// Entries older than this are pruned when the store opens.
    pub retention_days: u32,
    /// How many recently viewed entries seed an empty query.
    pub seed_limit: u32,
}

impl HistoryConfig {
    pub fn new() -> Self {
        let path = env::var("WORDHORD_HISTORY_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("history.db"));

        let retention_days = env::var("WORDHORD_HISTORY_RETENTION_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(180);

        let seed_limit = env::var("WORDHORD_HISTORY_SEED_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(25);

        HistoryConfig {
            path,
            retention_days,
            seed_limit,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
