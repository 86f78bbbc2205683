use crate::error::CoreError;

/// One 4-tuple from a sqlite `offsets(...)` report.
///
/// See https://www.sqlite.org/fts3.html#offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOffset {
    /// Index of the table column the match landed in.
    pub col: u32,
    /// Which query term matched, 0-based.
    pub term: u32,
    /// Byte position of the match within the column text.
    pub offset: u32,
    /// Length of the match in bytes.
    pub len: u32,
}

impl MatchOffset {
    pub fn new(col: u32, term: u32, offset: u32, len: u32) -> Self {
        Self { col, term, offset, len }
    }
}

/// Decode a raw offsets report into structured tuples.
///
/// The report is a whitespace-separated list of integers, four per match,
/// in `(col, term, offset, len)` order. An empty report is a valid empty
/// parse; anything that is not a multiple of four non-negative integers is
/// malformed.
pub fn parse_offsets(raw: &str) -> Result<Vec<MatchOffset>, CoreError> {
    let tokens = raw
        .split_whitespace()
        .map(|t| {
            t.parse::<u32>()
                .map_err(|_| CoreError::MalformedOffsets(raw.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if tokens.len() % 4 != 0 {
        return Err(CoreError::MalformedOffsets(raw.to_string()));
    }
    Ok(tokens
        .chunks_exact(4)
        .map(|t| MatchOffset::new(t[0], t[1], t[2], t[3]))
        .collect())
}
