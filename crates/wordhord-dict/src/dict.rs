use std::collections::HashSet;
use std::path::Path;

use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use wordhord_core::normalize::normalize;
use wordhord_core::offsets::parse_offsets;
use wordhord_core::score::{MINIMUM_SCORE, score_term};
use wordhord_core::term::Term;

use crate::error::DictError;

// Scoring happens in Rust, but we keep the database from handing back a
// huge number of low-quality rows: the whole-index branch is ordered by
// earliest match and LIMITed, while matches on the "terms" and "mod_e"
// columns are precise enough to return unbounded.
const QRY: &str = "SELECT * FROM ( \
     SELECT title, html, conj_html, mod_e, rowid, terms, entry_type, offsets(defn_idx) \
     FROM defn_idx WHERE defn_idx MATCH ?1 \
     ORDER BY first_offset(offsets(defn_idx)) LIMIT ?2 ) \
     UNION SELECT title, html, conj_html, mod_e, rowid, terms, entry_type, offsets(defn_idx) \
     FROM defn_idx WHERE terms MATCH ?3 \
     UNION SELECT title, html, conj_html, mod_e, rowid, terms, entry_type, offsets(defn_idx) \
     FROM defn_idx WHERE mod_e MATCH ?3";

/// Answers search queries against a dictionary database.
///
/// The handle is caller-owned and read-only; `Dict` keeps no other state,
/// so every call stands alone and concurrent searches are a matter of
/// opening one `Dict` per thread.
pub struct Dict {
    conn: Connection,
}

impl Dict {
    /// Wrap an already-open connection exposing the `defn_idx` and
    /// `defn_content` tables of a dictionary build.
    pub fn new(conn: Connection) -> Result<Self, DictError> {
        register_first_offset(&conn)?;
        Ok(Self { conn })
    }

    /// Open the dictionary database at `path` read-only.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::new(conn)
    }

    /// Search for inflected forms, definition text, or modern-English
    /// phrases matching `query`. At most `limit` whole-index matches are
    /// considered; form and modern-English matches are never truncated.
    ///
    /// Returns terms in descending score order with duplicate titles
    /// removed.
    pub fn search(&self, query: &str, limit: u32) -> Result<Vec<Term>, DictError> {
        let term = normalize(query);
        if term.is_empty() {
            return Ok(Vec::new());
        }
        // A query with spaces cannot match a single form, so it becomes a
        // phrase search; otherwise match definition tokens or a form prefix.
        let fts_query = if term.contains(' ') {
            format!("\"{term}\"")
        } else {
            format!("html:{term} OR terms:{term}*")
        };
        tracing::debug!(%term, %fts_query, limit, "dictionary search");
        let mut stmt = self.conn.prepare_cached(QRY)?;
        let rows = stmt.query_map(params![fts_query, limit, term], |row| {
            Ok(RawMatch {
                title: row.get(0)?,
                html: row.get(1)?,
                conj_html: row.get(2)?,
                mod_e: row.get(3)?,
                nid: row.get(4)?,
                terms: row.get(5)?,
                entry_type: row.get(6)?,
                offsets: row.get(7)?,
            })
        })?;
        let mut terms = Vec::new();
        for row in rows {
            terms.push(row?.into_term(&term)?);
        }
        terms.sort_by(|a, b| b.score.total_cmp(&a.score));
        terms.retain(|t| t.score >= MINIMUM_SCORE);
        Ok(dedup_titles(terms))
    }

    /// Load a single entry by its stable id. No normalization or scoring
    /// is involved; the returned score is always 0.0.
    pub fn load_by_id(&self, nid: i64) -> Result<Option<Term>, DictError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT title, html, conj_html, mod_e, id FROM defn_content WHERE id = ?1",
        )?;
        let term = stmt
            .query_row(params![nid], |row| {
                Ok(Term {
                    title: row.get(0)?,
                    defn_html: row.get(1)?,
                    conj_html: row.get(2)?,
                    mod_e: row.get(3)?,
                    nid: row.get(4)?,
                    score: 0.0,
                })
            })
            .optional()?;
        Ok(term)
    }
}

/// One row out of the union query, before scoring.
struct RawMatch {
    title: String,
    html: String,
    conj_html: Option<String>,
    mod_e: Option<String>,
    nid: i64,
    terms: String,
    entry_type: String,
    offsets: String,
}

impl RawMatch {
    fn into_term(self, term: &str) -> Result<Term, DictError> {
        // "terms" is of the form "/form1/form2/.../", so seeing "/term/"
        // means an exact whole-form match, not a partial overlap.
        let term_match = self.terms.contains(&format!("/{term}/"));
        let mod_e_match = self
            .mod_e
            .as_deref()
            .is_some_and(|m| m.to_lowercase().contains(term));
        let offsets = parse_offsets(&self.offsets)?;
        let score = score_term(
            term_match,
            mod_e_match,
            self.mod_e.is_some(),
            &self.entry_type,
            &offsets,
        )?;
        Ok(Term {
            title: self.title,
            defn_html: self.html,
            conj_html: self.conj_html,
            mod_e: self.mod_e,
            nid: self.nid,
            score,
        })
    }
}

/// Keep the first (highest-scoring) occurrence of each distinct title.
fn dedup_titles(terms: Vec<Term>) -> Vec<Term> {
    let mut seen = HashSet::new();
    terms
        .into_iter()
        .filter(|t| seen.insert(t.title.clone()))
        .collect()
}

/// Register `first_offset(report)`: the byte offset of the first match in
/// an offsets report. Lets the body branch keep its earliest-match rows
/// when the LIMIT applies. A report this cannot parse sorts last here and
/// is rejected properly when the row is scored.
fn register_first_offset(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.create_scalar_function(
        "first_offset",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let report: String = ctx.get(0)?;
            Ok(first_offset(&report))
        },
    )
}

fn first_offset(report: &str) -> i64 {
    report
        .split_whitespace()
        .nth(2)
        .and_then(|t| t.parse().ok())
        .unwrap_or(i64::MAX)
}
