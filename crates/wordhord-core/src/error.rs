use thiserror::Error;

/// Violations of guarantees the dictionary build makes about its own data.
///
/// Both variants indicate index corruption or a schema mismatch, so callers
/// abort the current query instead of degrading the ranking silently.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("could not parse offsets: {0:?}")]
    MalformedOffsets(String),

    #[error("invalid entry type: {0:?}")]
    InvalidEntryType(String),
}
