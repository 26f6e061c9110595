//! Acknowledged-achievement ledger
//!
//! Persists which achievement keys the user has already been shown, so
//! that unlock notifications fire once. The pure evaluator knows nothing
//! about this store; it only ever sees the baseline as a value.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::definitions::{Achievement, AchievementId};
use super::evaluator;
use crate::stats::models::AchievementStats;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS achievements (
    id TEXT PRIMARY KEY,
    acknowledged_at INTEGER NOT NULL
);
"#;

/// Ledger of acknowledged achievements backed by SQLite
#[derive(Clone)]
pub struct AchievementLedger {
    conn: Arc<Mutex<Connection>>,
}

impl AchievementLedger {
    /// Open or create the ledger at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create ledger dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open achievement ledger: {}", path.display()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::from_conn(conn)
    }

    /// Open an in-memory ledger (tests, previews)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_conn(Connection::open_in_memory()?)
    }

    fn from_conn(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get current timestamp in milliseconds
    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// All acknowledged achievement keys
    pub fn acknowledged(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().expect("ledger lock poisoned");
        let mut stmt = conn.prepare("SELECT id FROM achievements")?;
        let keys: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(keys)
    }

    /// Count of acknowledged achievements
    pub fn acknowledged_count(&self) -> Result<usize> {
        let conn = self.conn.lock().expect("ledger lock poisoned");
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM achievements", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    /// Diff the snapshot against the stored baseline and ratchet forward
    ///
    /// Returns the achievements unlocked by `stats` that were not yet
    /// acknowledged, in catalog order, and records them so the next call
    /// with the same stats returns nothing.
    pub fn record_seen(&self, stats: &AchievementStats) -> Result<Vec<&'static Achievement>> {
        let acknowledged = self.acknowledged()?;

        // Keys written by older builds may no longer exist in the
        // catalog; they stay in storage and are simply never matched.
        for key in &acknowledged {
            if AchievementId::from_str(key).is_none() {
                tracing::warn!("Unknown achievement key in ledger: {}", key);
            }
        }

        let fresh = evaluator::newly_unlocked(stats, &acknowledged);
        if fresh.is_empty() {
            return Ok(fresh);
        }

        let now = Self::now_ms();
        let conn = self.conn.lock().expect("ledger lock poisoned");
        for achievement in &fresh {
            conn.execute(
                "INSERT OR IGNORE INTO achievements (id, acknowledged_at) VALUES (?1, ?2)",
                (achievement.id.as_str(), now),
            )?;
        }
        tracing::debug!(count = fresh.len(), "acknowledged new achievements");

        Ok(fresh)
    }
}
