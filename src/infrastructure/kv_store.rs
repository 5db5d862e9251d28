//! Key-value persistence adapters.
//!
//! The durable store is a single SQLite table of string pairs that survives
//! across runs; the session store is an in-memory map scoped to the running
//! process. Both expose the same get/set shape so callers don't care which
//! one they write through.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{AppError, Result};

/// Durable key holding the JSON-serialized quote collection.
pub const KEY_QUOTES: &str = "quotes";

/// Durable key holding the last-selected category filter.
pub const KEY_SELECTED_CATEGORY: &str = "selected_category";

/// Session key holding the JSON-serialized last-displayed quote.
pub const KEY_LAST_VIEWED: &str = "last_viewed_quote";

/// Durable string key-value store backed by SQLite.
pub struct DurableStore {
    conn: Connection,
}

impl DurableStore {
    /// Opens or creates the store at `path`.
    ///
    /// # Errors
    /// Returns error if the database cannot be opened or schema creation
    /// fails.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::io("Failed to create storage directory", e))?;
        }

        let conn = Connection::open(path).map_err(AppError::storage)?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory store, used by tests.
    ///
    /// # Errors
    /// Returns error if the database cannot be initialized.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(AppError::storage)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(AppError::storage)?;

        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            ",
        )
        .map_err(AppError::storage)?;

        Ok(Self { conn })
    }

    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns error on a query failure.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(AppError::storage)
    }

    /// Write `value` under `key`, overwriting any prior value.
    ///
    /// # Errors
    /// Returns error on a write failure.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                r"
                INSERT INTO kv (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = datetime('now')
                ",
                params![key, value],
            )
            .map_err(AppError::storage)?;

        Ok(())
    }
}

/// Process-scoped key-value store; contents are gone when the process exits.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    /// Create an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Write `value` under `key`, overwriting any prior value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_missing_key_is_none() {
        let store = DurableStore::open_in_memory().unwrap();
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = DurableStore::open_in_memory().unwrap();
        store.set(KEY_SELECTED_CATEGORY, "Learning").unwrap();
        assert_eq!(
            store.get(KEY_SELECTED_CATEGORY).unwrap().as_deref(),
            Some("Learning")
        );
    }

    #[test]
    fn test_set_overwrites() {
        let store = DurableStore::open_in_memory().unwrap();
        store.set(KEY_QUOTES, "[]").unwrap();
        store.set(KEY_QUOTES, "[1]").unwrap();
        assert_eq!(store.get(KEY_QUOTES).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("quotes.db");

        {
            let store = DurableStore::open(&db_path).unwrap();
            store.set(KEY_SELECTED_CATEGORY, "all").unwrap();
        }

        let store = DurableStore::open(&db_path).unwrap();
        assert_eq!(
            store.get(KEY_SELECTED_CATEGORY).unwrap().as_deref(),
            Some("all")
        );
    }

    #[test]
    fn test_session_store_is_plain_map() {
        let mut session = SessionStore::new();
        assert_eq!(session.get(KEY_LAST_VIEWED), None);
        session.set(KEY_LAST_VIEWED, "{}");
        assert_eq!(session.get(KEY_LAST_VIEWED), Some("{}"));
    }
}
