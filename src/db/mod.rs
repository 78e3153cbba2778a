//! Persistence layer for studymate.
//!
//! Each entity collection is stored as one versioned JSON payload under a
//! fixed key, in a single SQLite table created by the schema migrations.
//!
//! - [`db`]: connection setup in the application data directory
//! - [`migrations`]: versioned schema migrations for the SQLite file
//! - [`collections`]: the [`CollectionStore`](collections::CollectionStore)
//!   trait, its SQLite and in-memory implementations
//! - [`payload`]: payload envelope, encoding, and upgrades of older payloads
//!
//! ```rust
//! use studymate::db::collections::Collections;
//! use studymate::db::payload::{load_collection, save_collection};
//! use studymate::libs::task::Task;
//!
//! let mut store = Collections::in_memory()?;
//! save_collection::<Task>(&mut store, &[])?;
//! let tasks: Vec<Task> = load_collection(&store)?;
//! assert!(tasks.is_empty());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod collections;
pub mod db;
pub mod migrations;
pub mod payload;
