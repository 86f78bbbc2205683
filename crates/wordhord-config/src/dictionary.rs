use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct DictionaryConfig {
    /// Path to the prebuilt dictionary database.
    pub path: PathBuf,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let path = env::var("WORDHORD_DICT_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("dict.db"));

        DictionaryConfig { path }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::new()
    }
}
