//! Versioned JSON payloads for stored collections.
//!
//! Collections are written as an envelope:
//!
//! ```json
//! { "version": 1, "records": [ { "id": "1722450000000", "title": "Essay", ... } ] }
//! ```
//!
//! A bare JSON array is what the browser dashboard kept in `localStorage`;
//! it is read as version 0. Older payloads are upgraded record by record
//! through the registered payload migrations before being decoded, and a
//! payload from a newer release is refused rather than guessed at.

use super::collections::{CollectionStore, StoreError};
use crate::libs::entity::{Collection, Entity};
use serde::Serialize;
use serde_json::{Map, Value};

/// Version written by this build.
pub const PAYLOAD_VERSION: u32 = 1;

const LEGACY_CREATED_AT: &str = "1970-01-01T00:00:00Z";

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u32,
    records: &'a [T],
}

type RecordMigration = fn(Collection, &mut Map<String, Value>);

struct PayloadMigration {
    version: u32,
    up: RecordMigration,
}

/// Ordered upgrades from one payload version to the next.
struct PayloadMigrations {
    migrations: Vec<PayloadMigration>,
}

impl PayloadMigrations {
    fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };

        // Version 1: camelCase field names and defaults for fields missing
        // from early browser exports
        manager.add_migration(1, |collection, record| {
            rename_field(record, "created_at", "createdAt");
            if let Some(Value::Number(id)) = record.get("id") {
                let id = id.to_string();
                record.insert("id".to_string(), Value::String(id));
            }
            default_field(record, "description", Value::from(""));
            match collection {
                Collection::Tasks => {
                    rename_field(record, "due_date", "dueDate");
                    default_field(record, "completed", Value::from(false));
                    default_field(record, "priority", Value::from("medium"));
                    default_field(record, "category", Value::from(""));
                }
                Collection::Goals => {
                    rename_field(record, "target_date", "targetDate");
                    default_field(record, "progress", Value::from(0));
                    default_field(record, "category", Value::from(""));
                }
                Collection::Events => {
                    default_field(record, "time", Value::from("00:00"));
                    default_field(record, "type", Value::from("event"));
                }
            }
            default_field(record, "createdAt", Value::from(LEGACY_CREATED_AT));
        });

        manager
    }

    fn add_migration(&mut self, version: u32, up: RecordMigration) {
        self.migrations.push(PayloadMigration { version, up });
    }

    fn upgrade(&self, collection: Collection, from: u32, records: &mut [Value]) -> Result<(), StoreError> {
        let pending: Vec<&PayloadMigration> = self.migrations.iter().filter(|m| m.version > from).collect();
        if pending.is_empty() {
            return Ok(());
        }

        for record in records.iter_mut() {
            let Value::Object(fields) = record else {
                return Err(StoreError::Malformed {
                    key: collection.key().to_string(),
                    reason: "record is not a JSON object".to_string(),
                });
            };
            for migration in &pending {
                (migration.up)(collection, fields);
            }
        }

        tracing::debug!(collection = collection.name(), from, to = PAYLOAD_VERSION, records = records.len(), "upgraded stored payload");
        Ok(())
    }
}

fn rename_field(record: &mut Map<String, Value>, from: &str, to: &str) {
    if record.contains_key(to) {
        return;
    }
    if let Some(value) = record.remove(from) {
        record.insert(to.to_string(), value);
    }
}

fn default_field(record: &mut Map<String, Value>, key: &str, value: Value) {
    match record.get(key) {
        Some(Value::Null) | None => {
            record.insert(key.to_string(), value);
        }
        Some(_) => {}
    }
}

/// Splits a raw payload into its version and record list.
fn unwrap_envelope(collection: Collection, value: Value) -> Result<(u32, Vec<Value>), StoreError> {
    let malformed = |reason: &str| StoreError::Malformed {
        key: collection.key().to_string(),
        reason: reason.to_string(),
    };

    match value {
        Value::Array(records) => Ok((0, records)),
        Value::Object(mut envelope) => {
            let version = envelope
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| malformed("missing numeric 'version'"))?;
            let version = u32::try_from(version).map_err(|_| malformed("'version' out of range"))?;
            match envelope.remove("records") {
                Some(Value::Array(records)) => Ok((version, records)),
                _ => Err(malformed("missing 'records' array")),
            }
        }
        _ => Err(malformed("expected an array or an envelope object")),
    }
}

/// Version of a raw payload, without decoding its records.
pub fn stored_version(collection: Collection, raw: &str) -> Result<u32, StoreError> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(unwrap_envelope(collection, value)?.0)
}

pub fn encode<E: Entity>(records: &[E]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(&Envelope {
        version: PAYLOAD_VERSION,
        records,
    })?)
}

/// Decodes a payload of any supported version into records of `E`.
pub fn decode<E: Entity>(raw: &str) -> Result<Vec<E>, StoreError> {
    let collection = E::COLLECTION;
    let value: Value = serde_json::from_str(raw)?;
    let (version, mut records) = unwrap_envelope(collection, value)?;

    if version > PAYLOAD_VERSION {
        return Err(StoreError::UnsupportedVersion {
            key: collection.key().to_string(),
            found: version,
            supported: PAYLOAD_VERSION,
        });
    }

    PayloadMigrations::new().upgrade(collection, version, &mut records)?;

    let records = records.into_iter().map(serde_json::from_value).collect::<Result<Vec<E>, _>>()?;
    Ok(records)
}

/// Loads a collection, treating a missing key as empty.
pub fn load_collection<E: Entity>(store: &dyn CollectionStore) -> Result<Vec<E>, StoreError> {
    match store.load(E::COLLECTION.key())? {
        Some(raw) => decode(&raw),
        None => Ok(Vec::new()),
    }
}

pub fn save_collection<E: Entity>(store: &mut dyn CollectionStore, records: &[E]) -> Result<(), StoreError> {
    let payload = encode(records)?;
    store.save(E::COLLECTION.key(), &payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_is_version_zero() {
        assert_eq!(stored_version(Collection::Tasks, "[]").unwrap(), 0);
        assert_eq!(stored_version(Collection::Tasks, r#"{"version":1,"records":[]}"#).unwrap(), 1);
    }

    #[test]
    fn defaults_do_not_overwrite_present_fields() {
        let mut record = Map::new();
        record.insert("priority".to_string(), Value::from("high"));
        default_field(&mut record, "priority", Value::from("medium"));
        default_field(&mut record, "completed", Value::from(false));
        assert_eq!(record["priority"], "high");
        assert_eq!(record["completed"], false);
    }
}
