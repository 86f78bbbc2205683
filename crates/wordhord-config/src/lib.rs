use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::history::HistoryConfig;
use self::search::SearchConfig;

pub mod dictionary;
pub mod history;
pub mod search;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub history: HistoryConfig,
    pub search: SearchConfig,
}

impl Config {
    /// Resolve the configuration from environment overrides and defaults.
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            history: HistoryConfig::new(),
            search: SearchConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
