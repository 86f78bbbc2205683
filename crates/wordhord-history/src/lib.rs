use std::path::PathBuf;

use rusqlite::{Connection, params};
use thiserror::Error;

/// Where the history database lives.
#[derive(Debug, Clone)]
pub enum Location {
    /// A durable file, created on first open.
    OnDisk(PathBuf),
    /// A connection-private database for hermetic tests; never touches
    /// disk.
    InMemory,
}

/// Failures opening or using the history store.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The store cannot exist without a writable backing medium.
    #[error("could not open history store at {path}: {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },

    #[error("history store error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Keeps track of which entries were viewed and when, so recently viewed
/// terms can seed the result list for an empty query.
///
/// Rows are append-only; the most recent view per id wins at read time.
/// Operations borrow the store and `close` consumes it, so a teardown can
/// never race an in-flight read or write.
pub struct TermHistory {
    conn: Connection,
}

impl std::fmt::Debug for TermHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermHistory").finish_non_exhaustive()
    }
}

impl TermHistory {
    /// Open or create the store. Entries with a timestamp below
    /// `delete_before_secs` (seconds since the epoch) are pruned; a value
    /// of zero or less disables pruning.
    pub fn open(location: Location, delete_before_secs: f64) -> Result<Self, HistoryError> {
        let conn = match &location {
            Location::OnDisk(path) => {
                Connection::open(path).map_err(|source| HistoryError::Open {
                    path: path.display().to_string(),
                    source,
                })?
            }
            Location::InMemory => Connection::open_in_memory()?,
        };
        conn.execute(
            "CREATE TABLE IF NOT EXISTS history (nid INTEGER, timestamp_secs REAL)",
            [],
        )?;
        if delete_before_secs > 0.0 {
            let pruned = conn.execute(
                "DELETE FROM history WHERE timestamp_secs < ?1",
                params![delete_before_secs],
            )?;
            if pruned > 0 {
                tracing::debug!(pruned, "pruned old history entries");
            }
        }
        Ok(Self { conn })
    }

    /// Append one viewed-at observation. Earlier observations of the same
    /// id are left alone.
    pub fn record_id(&self, nid: i64, time_millis: i64) -> Result<(), HistoryError> {
        self.conn.execute(
            "INSERT INTO history (nid, timestamp_secs) VALUES (?1, ?2)",
            params![nid, time_millis as f64 / 1000.0],
        )?;
        Ok(())
    }

    /// Ids of viewed entries, most recently viewed first, at most `limit`
    /// of them.
    pub fn get_ids(&self, limit: u32) -> Result<Vec<i64>, HistoryError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT nid FROM ( SELECT nid, MAX(timestamp_secs) AS t FROM history \
             GROUP BY nid ) ORDER BY t DESC LIMIT ?1",
        )?;
        let ids = stmt
            .query_map(params![limit], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;
        Ok(ids)
    }

    /// Release the backing database.
    pub fn close(self) -> Result<(), HistoryError> {
        self.conn
            .close()
            .map_err(|(_, err)| HistoryError::Sqlite(err))
    }
}

#[cfg(test)]
mod tests {
    use super::{HistoryError, Location, TermHistory};

    #[test]
    fn most_recent_distinct_ids_come_first() {
        let history = TermHistory::open(Location::InMemory, 0.0).unwrap();
        history.record_id(100, 1000).unwrap();
        history.record_id(101, 1001).unwrap();

        assert_eq!(history.get_ids(0).unwrap(), Vec::<i64>::new());
        assert_eq!(history.get_ids(1).unwrap(), vec![101]);
        assert_eq!(history.get_ids(2).unwrap(), vec![101, 100]);
        assert_eq!(history.get_ids(3).unwrap(), vec![101, 100]);
    }

    #[test]
    fn repeat_views_do_not_duplicate_an_id() {
        let history = TermHistory::open(Location::InMemory, 0.0).unwrap();
        history.record_id(100, 1000).unwrap();
        history.record_id(101, 1001).unwrap();
        history.record_id(101, 2000).unwrap();

        assert_eq!(history.get_ids(10).unwrap(), vec![101, 100]);
    }

    #[test]
    fn a_newer_view_reorders_ids() {
        let history = TermHistory::open(Location::InMemory, 0.0).unwrap();
        history.record_id(100, 1000).unwrap();
        history.record_id(101, 1001).unwrap();
        history.record_id(100, 5000).unwrap();

        assert_eq!(history.get_ids(10).unwrap(), vec![100, 101]);
    }

    #[test]
    fn opening_prunes_entries_before_the_cutoff() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");

        let history = TermHistory::open(Location::OnDisk(path.clone()), 0.0).unwrap();
        history.record_id(1, 1_000_000).unwrap(); // 1000s
        history.record_id(2, 3_000_000).unwrap(); // 3000s
        history.close().unwrap();

        let history = TermHistory::open(Location::OnDisk(path), 2000.0).unwrap();
        assert_eq!(history.get_ids(10).unwrap(), vec![2]);
    }

    #[test]
    fn zero_cutoff_disables_pruning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");

        let history = TermHistory::open(Location::OnDisk(path.clone()), 0.0).unwrap();
        history.record_id(1, 1_000_000).unwrap();
        history.close().unwrap();

        let history = TermHistory::open(Location::OnDisk(path), 0.0).unwrap();
        assert_eq!(history.get_ids(10).unwrap(), vec![1]);
    }

    #[test]
    fn unwritable_location_fails_to_open() {
        let err = TermHistory::open(
            Location::OnDisk("/nonexistent-dir/wordhord/history.db".into()),
            0.0,
        )
        .unwrap_err();
        assert!(matches!(err, HistoryError::Open { .. }));
    }
}
