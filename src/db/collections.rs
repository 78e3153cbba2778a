//! Key-value persistence for the entity collections.
//!
//! A [`CollectionStore`] maps a collection key to one serialized payload.
//! Every save replaces the whole payload for that key, so readers always see
//! either the previous or the new collection in full. Encoding, decoding and
//! payload versioning live in [`payload`](super::payload); stores only move
//! strings.
//!
//! ```rust
//! use studymate::db::collections::{CollectionStore, Collections};
//!
//! let mut store = Collections::in_memory()?;
//! store.save("academic-dashboard-tasks", r#"{"version":1,"records":[]}"#)?;
//! assert!(store.load("academic-dashboard-tasks")?.is_some());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

const SELECT_PAYLOAD: &str = "SELECT payload FROM collections WHERE key = ?1";
const UPSERT_PAYLOAD: &str = "INSERT INTO collections (key, payload, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
    ON CONFLICT(key) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("collection '{key}' has payload version {found}, newer than the supported version {supported}")]
    UnsupportedVersion { key: String, found: u32, supported: u32 },

    #[error("collection '{key}' payload is malformed: {reason}")]
    Malformed { key: String, reason: String },

    #[error("store is read-only")]
    ReadOnly,
}

/// Durable storage of serialized collections, one payload per key.
pub trait CollectionStore {
    /// Returns the stored payload, or `None` if the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the payload stored under `key`.
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError>;
}

/// SQLite-backed store in the application data directory.
pub struct Collections {
    conn: Connection,
}

impl Collections {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self { conn: db.conn })
    }

    pub fn in_memory() -> Result<Self> {
        let db = Db::in_memory()?;
        Ok(Self { conn: db.conn })
    }

    /// Keys that currently hold a payload.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT key FROM collections ORDER BY key")?;
        let keys = stmt.query_map([], |row| row.get::<_, String>(0))?.collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl CollectionStore for Collections {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let payload = self
            .conn
            .query_row(SELECT_PAYLOAD, params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(payload)
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.conn.execute(UPSERT_PAYLOAD, params![key, payload])?;
        Ok(())
    }
}

/// Non-persistent store, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    payloads: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose saves always fail with [`StoreError::ReadOnly`].
    pub fn read_only(payloads: HashMap<String, String>) -> Self {
        Self { payloads, read_only: true }
    }

    pub fn with_payload(mut self, key: &str, payload: &str) -> Self {
        self.payloads.insert(key.to_string(), payload.to_string());
        self
    }
}

impl CollectionStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.payloads.get(key).cloned())
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.payloads.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
