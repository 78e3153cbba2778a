//! Shared shape of the three stored entity kinds.
//!
//! Tasks, goals and calendar events are flat records with no references to
//! each other. Each kind comes in three forms:
//!
//! - the record itself, carrying `id` and `createdAt`;
//! - a draft ([`Draft`]) holding everything except those two fields, which
//!   is what callers hand to [`DataContext::add`](crate::libs::context::DataContext::add);
//! - a patch ([`Patch`]) with every mutable field optional, merged into an
//!   existing record by [`DataContext::update`](crate::libs::context::DataContext::update).
//!
//! Because patches have no `id` or `createdAt` field, neither can change
//! after creation.

use super::event::CalendarEvent;
use super::goal::Goal;
use super::task::Task;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifies one of the three persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tasks,
    Goals,
    Events,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Tasks, Collection::Goals, Collection::Events];

    /// Storage key of the collection.
    ///
    /// These are the keys the browser dashboard used in `localStorage`, kept
    /// so exports from it can be imported as-is.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Tasks => "academic-dashboard-tasks",
            Collection::Goals => "academic-dashboard-goals",
            Collection::Events => "academic-dashboard-events",
        }
    }

    /// Short name used in export files and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Tasks => "tasks",
            Collection::Goals => "goals",
            Collection::Events => "events",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All three collections, owned.
///
/// The data context hands out `&Dataset` as its read-only snapshot; the
/// derived views work on its slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

impl Dataset {
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Tasks => self.tasks.len(),
            Collection::Goals => self.goals.len(),
            Collection::Events => self.events.len(),
        }
    }
}

/// Drops records whose id already appeared earlier in `records`, keeping the
/// first occurrence. Returns the ids of the dropped records.
pub fn dedup_by_id<E: Entity>(records: &mut Vec<E>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dropped = Vec::new();
    records.retain(|record| {
        if seen.insert(record.id().to_string()) {
            true
        } else {
            dropped.push(record.id().to_string());
            false
        }
    });
    dropped
}

pub trait Entity: Clone + Serialize + DeserializeOwned {
    const COLLECTION: Collection;

    type Draft: Draft<Record = Self>;
    type Patch: Patch<Record = Self>;

    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// The collection holding this kind inside a dataset.
    fn records(data: &Dataset) -> &Vec<Self>;

    fn records_mut(data: &mut Dataset) -> &mut Vec<Self>;
}

/// Creation input for an entity: every field except `id` and `createdAt`.
pub trait Draft {
    type Record: Entity;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Self::Record;
}

/// Partial update for an entity. `None` fields leave the record untouched.
pub trait Patch {
    type Record: Entity;

    fn apply_to(self, record: &mut Self::Record);

    fn is_empty(&self) -> bool;
}

impl Entity for Task {
    const COLLECTION: Collection = Collection::Tasks;

    type Draft = super::task::NewTask;
    type Patch = super::task::TaskPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn records(data: &Dataset) -> &Vec<Self> {
        &data.tasks
    }

    fn records_mut(data: &mut Dataset) -> &mut Vec<Self> {
        &mut data.tasks
    }
}

impl Entity for Goal {
    const COLLECTION: Collection = Collection::Goals;

    type Draft = super::goal::NewGoal;
    type Patch = super::goal::GoalPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn records(data: &Dataset) -> &Vec<Self> {
        &data.goals
    }

    fn records_mut(data: &mut Dataset) -> &mut Vec<Self> {
        &mut data.goals
    }
}

impl Entity for CalendarEvent {
    const COLLECTION: Collection = Collection::Events;

    type Draft = super::event::NewEvent;
    type Patch = super::event::EventPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn records(data: &Dataset) -> &Vec<Self> {
        &data.events
    }

    fn records_mut(data: &mut Dataset) -> &mut Vec<Self> {
        &mut data.events
    }
}
