//! In-process owner of the task, goal and event collections.
//!
//! [`DataContext`] is the single source of truth while the program runs. It
//! loads all three collections from a [`CollectionStore`] when opened, applies
//! every mutation in memory, and writes the affected collection back in full
//! before the call returns. Mutations never fail from the caller's point of
//! view: a store that refuses a write is reported through the message macros
//! and the in-memory state stays authoritative for the rest of the session.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use studymate::db::collections::MemoryStore;
//! use studymate::libs::context::DataContext;
//! use studymate::libs::task::{NewTask, Task, TaskPatch};
//!
//! let mut ctx = DataContext::open(Box::new(MemoryStore::new()));
//! let due = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
//! let task = ctx.add(NewTask::new("Essay", due));
//! ctx.update::<TaskPatch>(&task.id, TaskPatch::completed(true));
//! assert!(ctx.find::<Task>(&task.id).unwrap().completed);
//! ```

use super::clock::{Clock, IdGenerator, SystemClock};
use super::entity::{dedup_by_id, Collection, Dataset, Draft, Entity, Patch};
use super::event::CalendarEvent;
use super::goal::Goal;
use super::messages::Message;
use super::task::Task;
use crate::db::collections::{CollectionStore, Collections};
use crate::db::payload::{load_collection, save_collection};
use crate::msg_warning;
use anyhow::Result;

/// Handle returned by [`DataContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(Collection)>;

pub struct DataContext {
    store: Box<dyn CollectionStore>,
    clock: Box<dyn Clock>,
    ids: IdGenerator,
    data: Dataset,
    version: u64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl DataContext {
    pub fn open(store: Box<dyn CollectionStore>) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    pub fn with_clock(store: Box<dyn CollectionStore>, clock: Box<dyn Clock>) -> Self {
        let mut data = Dataset {
            tasks: load_or_empty::<Task>(store.as_ref()),
            goals: load_or_empty::<Goal>(store.as_ref()),
            events: load_or_empty::<CalendarEvent>(store.as_ref()),
        };
        drop_duplicates::<Task>(&mut data);
        drop_duplicates::<Goal>(&mut data);
        drop_duplicates::<CalendarEvent>(&mut data);

        let ids = seed_ids(&data);

        tracing::debug!(
            tasks = data.tasks.len(),
            goals = data.goals.len(),
            events = data.events.len(),
            "data context opened"
        );

        Self {
            store,
            clock,
            ids,
            data,
            version: 0,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Opens the SQLite store in the application data directory.
    pub fn open_default() -> Result<Self> {
        let store = Collections::new()?;
        Ok(Self::open(Box::new(store)))
    }

    /// Creates a record from `draft`, stamping a fresh id and the current time.
    pub fn add<D: Draft>(&mut self, draft: D) -> D::Record {
        let now = self.clock.now();
        let mut id = self.ids.next(now);
        while self.find::<D::Record>(&id).is_some() {
            id = self.ids.next(now);
        }
        let record = draft.into_record(id, now);

        <D::Record as Entity>::records_mut(&mut self.data).push(record.clone());
        self.commit::<D::Record>();

        record
    }

    /// Merges `patch` into the record with `id`. Unknown ids are ignored.
    pub fn update<P: Patch>(&mut self, id: &str, patch: P) {
        let collection = <P::Record as Entity>::COLLECTION;
        let records = <P::Record as Entity>::records_mut(&mut self.data);
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            tracing::debug!(collection = collection.name(), id, "update skipped, no such record");
            return;
        };

        patch.apply_to(record);
        self.commit::<P::Record>();
    }

    /// Removes the record with `id`, if any.
    pub fn delete<E: Entity>(&mut self, id: &str) {
        let records = E::records_mut(&mut self.data);
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() != before {
            self.commit::<E>();
        }
    }

    pub fn find<E: Entity>(&self, id: &str) -> Option<&E> {
        E::records(&self.data).iter().find(|r| r.id() == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.find(id)
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.find(id)
    }

    pub fn event(&self, id: &str) -> Option<&CalendarEvent> {
        self.find(id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    pub fn goals(&self) -> &[Goal] {
        &self.data.goals
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.data.events
    }

    /// Borrowed view of all three collections for the derived views.
    pub fn snapshot(&self) -> &Dataset {
        &self.data
    }

    /// Number of effective mutations since the context was opened.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Current time according to the context's clock.
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Replaces every collection at once and persists all three.
    ///
    /// Used by data import. Ids in the new data are kept as they are; a
    /// repeated id keeps only its first record.
    pub fn replace_all(&mut self, mut data: Dataset) {
        drop_duplicates::<Task>(&mut data);
        drop_duplicates::<Goal>(&mut data);
        drop_duplicates::<CalendarEvent>(&mut data);
        self.ids = seed_ids(&data);
        self.data = data;

        self.commit::<Task>();
        self.commit::<Goal>();
        self.commit::<CalendarEvent>();
    }

    /// Registers a callback run after every effective mutation with the
    /// collection that changed.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(Collection) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn commit<E: Entity>(&mut self) {
        let collection = E::COLLECTION;
        if let Err(e) = save_collection::<E>(self.store.as_mut(), E::records(&self.data)) {
            msg_warning!(Message::StorePersistFailed(collection.name().to_string(), e.to_string()));
        }

        self.version += 1;
        for (_, observer) in self.observers.iter_mut() {
            observer(collection);
        }
    }
}

fn seed_ids(data: &Dataset) -> IdGenerator {
    let existing = data
        .tasks
        .iter()
        .map(|t| t.id.as_str())
        .chain(data.goals.iter().map(|g| g.id.as_str()))
        .chain(data.events.iter().map(|e| e.id.as_str()));
    IdGenerator::seeded(existing)
}

fn drop_duplicates<E: Entity>(data: &mut Dataset) {
    let dropped = dedup_by_id(E::records_mut(data));
    if !dropped.is_empty() {
        tracing::warn!(collection = E::COLLECTION.name(), ids = ?dropped, "dropped records with repeated ids");
    }
}

fn load_or_empty<E: Entity>(store: &dyn CollectionStore) -> Vec<E> {
    match load_collection::<E>(store) {
        Ok(records) => records,
        Err(e) => {
            msg_warning!(Message::StoreLoadFailed(E::COLLECTION.name().to_string(), e.to_string()));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::collections::MemoryStore;
    use crate::libs::entity::Draft;
    use crate::libs::task::{NewTask, TaskPatch};
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    #[test]
    fn version_counts_effective_mutations_only() {
        let mut ctx = DataContext::open(Box::new(MemoryStore::new()));
        let task = ctx.add(NewTask::new("Essay", due()));
        ctx.update(&task.id, TaskPatch::completed(true));
        ctx.update("missing", TaskPatch::completed(true));
        ctx.delete::<Task>("missing");
        assert_eq!(ctx.version(), 2);
    }

    #[test]
    fn replaced_data_keeps_one_record_per_id() {
        let mut ctx = DataContext::open(Box::new(MemoryStore::new()));
        let first = ctx.add(NewTask::new("Essay", due()));
        let mut copy = first.clone();
        copy.title = "Essay copy".to_string();

        let mut data = ctx.snapshot().clone();
        data.tasks.push(copy);
        ctx.replace_all(data);
        assert_eq!(ctx.tasks().len(), 1);
        assert_eq!(ctx.tasks()[0].title, "Essay");

        ctx.delete::<Task>(&first.id);
        assert!(ctx.tasks().is_empty());
    }

    #[test]
    fn add_after_maximal_id_still_issues_a_fresh_id() {
        let mut ctx = DataContext::open(Box::new(MemoryStore::new()));
        let mut data = ctx.snapshot().clone();
        let mut top = NewTask::new("Imported", due()).into_record(i64::MAX.to_string(), chrono::Utc::now());
        top.completed = true;
        data.tasks.push(top);
        ctx.replace_all(data);

        let added = ctx.add(NewTask::new("Essay", due()));
        let second = ctx.add(NewTask::new("Lab report", due()));
        assert_ne!(added.id, i64::MAX.to_string());
        assert_ne!(added.id, second.id);
        assert_eq!(ctx.tasks().len(), 3);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let mut ctx = DataContext::open(Box::new(MemoryStore::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = ctx.subscribe(move |c| sink.borrow_mut().push(c));

        ctx.add(NewTask::new("Essay", due()));
        assert!(ctx.unsubscribe(id));
        assert!(!ctx.unsubscribe(id));
        ctx.add(NewTask::new("Lab report", due()));

        assert_eq!(*seen.borrow(), vec![Collection::Tasks]);
    }
}
