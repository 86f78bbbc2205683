use thiserror::Error;
use wordhord_core::error::CoreError;

/// Failures surfaced by the search engine.
#[derive(Debug, Error)]
pub enum DictError {
    /// Offsets or entry-type data violated the dictionary build's
    /// guarantees; the current query is aborted.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing database was unreadable or a query failed.
    #[error("dictionary database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
