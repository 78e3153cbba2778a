//! JSON export and import of all collections.
//!
//! An export file is a single object with `tasks`, `goals` and `events`.
//! On import each of those may be a plain array, a versioned payload
//! envelope, or a string holding either, which is how `localStorage` values
//! look in a `JSON.stringify(localStorage)` dump. All go through the same
//! upgrade path as stored payloads. The `localStorage` key names
//! (`academic-dashboard-tasks` and so on) are accepted in place of the short
//! names. Records repeating an id already seen in the same collection are
//! dropped and listed in [`Import::duplicates`].

use super::entity::{dedup_by_id, Collection, Dataset, Entity};
use crate::db::payload::decode;
use anyhow::Result;
use serde_json::Value;
use std::fs::{self, File};
use std::path::Path;

pub fn export(data: &Dataset, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(&file, data)?;
    Ok(())
}

/// Result of reading an import file.
#[derive(Debug, Clone, Default)]
pub struct Import {
    pub data: Dataset,
    /// Collections the file did not contain.
    pub missing: Vec<Collection>,
    /// Ids of records dropped because an earlier record had the same id.
    pub duplicates: Vec<(Collection, String)>,
}

pub fn read_import(path: &Path) -> Result<Import> {
    let raw = fs::read_to_string(path)?;
    parse_import(&raw)
}

pub fn parse_import(raw: &str) -> Result<Import> {
    let mut root: Value = serde_json::from_str(raw)?;
    let mut import = Import::default();

    import.data.tasks = take_collection(&mut root, &mut import)?;
    import.data.goals = take_collection(&mut root, &mut import)?;
    import.data.events = take_collection(&mut root, &mut import)?;

    Ok(import)
}

fn take_collection<E: Entity>(root: &mut Value, import: &mut Import) -> Result<Vec<E>> {
    let collection = E::COLLECTION;
    // Accept both the export names and the raw localStorage keys
    let field = if root.get(collection.name()).is_some() {
        collection.name()
    } else {
        collection.key()
    };
    let section = root.get_mut(field).map(Value::take).filter(|value| !value.is_null());

    let mut records: Vec<E> = match section {
        Some(Value::String(raw)) => decode(&raw)?,
        Some(value) => decode(&value.to_string())?,
        None => {
            import.missing.push(collection);
            return Ok(Vec::new());
        }
    };

    let dropped = dedup_by_id(&mut records);
    import.duplicates.extend(dropped.into_iter().map(|id| (collection, id)));
    Ok(records)
}
