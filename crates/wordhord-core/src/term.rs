/// A single search result or directly loaded dictionary entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// Display headword. Never empty for a persisted entry.
    pub title: String,
    /// Definition body as HTML. Never empty for a persisted entry.
    pub defn_html: String,
    /// Conjugation table HTML, when the entry has one.
    pub conj_html: Option<String>,
    /// Modern-English equivalent, when the entry has one.
    pub mod_e: Option<String>,
    /// Stable row id from the dictionary build.
    pub nid: i64,
    /// Ordering key within the search call that produced this value;
    /// 0.0 for direct by-id loads.
    pub score: f64,
}

impl Term {
    /// Reserved id for synthetic entries (such as an "about" page) that are
    /// never persisted in the dictionary database.
    pub const SYNTHETIC_NID: i64 = 0;
}
