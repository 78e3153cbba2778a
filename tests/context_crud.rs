#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use studymate::db::collections::{CollectionStore, Collections, MemoryStore};
    use studymate::db::payload::{load_collection, PAYLOAD_VERSION};
    use studymate::libs::clock::FixedClock;
    use studymate::libs::context::DataContext;
    use studymate::libs::data_storage::DATA_DIR_ENV;
    use studymate::libs::entity::Collection;
    use studymate::libs::event::{CalendarEvent, EventKind, EventPatch, NewEvent};
    use studymate::libs::goal::{Goal, GoalPatch, NewGoal};
    use studymate::libs::task::{NewTask, Priority, Task, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl StoreTestContext {
        fn db_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("studymate.db")
        }

        fn open(&self, clock: FixedClock) -> DataContext {
            let store = Collections::open(&self.db_path()).unwrap();
            DataContext::with_clock(Box::new(store), Box::new(clock))
        }
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var(DATA_DIR_ENV, temp_dir.path());
            StoreTestContext { temp_dir }
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 31, 18, 26, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn essay() -> NewTask {
        NewTask {
            title: "Essay".to_string(),
            description: "History essay draft".to_string(),
            completed: false,
            priority: Priority::High,
            due_date: date(2025, 8, 1),
            category: "History".to_string(),
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_returns_record_with_generated_fields(ctx: &mut StoreTestContext) {
        let mut data = ctx.open(FixedClock::new(start()));

        let task = data.add(essay());

        assert_eq!(task.id, start().timestamp_millis().to_string());
        assert_eq!(task.created_at, start());
        assert_eq!(task.title, "Essay");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, date(2025, 8, 1));
        assert!(!task.completed);
        assert_eq!(data.task(&task.id), Some(&task));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_ids_are_unique_on_a_frozen_clock(ctx: &mut StoreTestContext) {
        let mut data = ctx.open(FixedClock::new(start()));

        let a = data.add(essay());
        let b = data.add(NewGoal::new("Read 10 books", date(2025, 12, 31)));
        let c = data.add(NewEvent::new("Exam", date(2025, 8, 5), NaiveTime::from_hms_opt(9, 0, 0).unwrap()));

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_changes_only_patched_field(ctx: &mut StoreTestContext) {
        let mut data = ctx.open(FixedClock::ticking(start(), Duration::seconds(1)));
        let essay = data.add(essay());
        let other = data.add(NewTask::new("Lab report", date(2025, 8, 3)));

        data.update(
            &essay.id,
            TaskPatch {
                priority: Some(Priority::Low),
                ..Default::default()
            },
        );

        let updated = data.task(&essay.id).unwrap();
        assert_eq!(updated.priority, Priority::Low);
        assert_eq!(
            Task {
                priority: Priority::High,
                ..updated.clone()
            },
            essay
        );
        assert_eq!(data.task(&other.id), Some(&other));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_missing_id_is_noop(ctx: &mut StoreTestContext) {
        let mut data = ctx.open(FixedClock::new(start()));
        data.add(essay());
        let before = data.tasks().to_vec();
        let version = data.version();

        data.update("does-not-exist", TaskPatch::completed(true));

        assert_eq!(data.tasks(), before.as_slice());
        assert_eq!(data.version(), version);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_is_idempotent(ctx: &mut StoreTestContext) {
        let mut data = ctx.open(FixedClock::ticking(start(), Duration::seconds(1)));
        let essay = data.add(essay());
        let lab = data.add(NewTask::new("Lab report", date(2025, 8, 3)));

        data.delete::<Task>(&essay.id);
        assert_eq!(data.tasks().len(), 1);
        assert_eq!(data.tasks()[0], lab);

        data.delete::<Task>(&essay.id);
        assert_eq!(data.tasks().len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_goal_progress_is_snapped(ctx: &mut StoreTestContext) {
        let mut data = ctx.open(FixedClock::new(start()));
        let goal = data.add(NewGoal::new("Read 10 books", date(2025, 12, 31)));

        data.update(&goal.id, GoalPatch::progress(42));
        assert_eq!(data.goal(&goal.id).unwrap().progress, 40);

        data.update(&goal.id, GoalPatch::progress(250));
        assert_eq!(data.goal(&goal.id).unwrap().progress, 100);
        assert!(data.goal(&goal.id).unwrap().is_completed());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_event_update_and_delete(ctx: &mut StoreTestContext) {
        let mut data = ctx.open(FixedClock::new(start()));
        let exam = data.add(NewEvent::new("Exam", date(2025, 8, 5), NaiveTime::from_hms_opt(9, 0, 0).unwrap()));

        data.update(
            &exam.id,
            EventPatch {
                kind: Some(EventKind::Deadline),
                ..Default::default()
            },
        );
        assert_eq!(data.event(&exam.id).unwrap().kind, EventKind::Deadline);

        data.delete::<CalendarEvent>(&exam.id);
        assert!(data.events().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_persisted_copy_matches_memory(ctx: &mut StoreTestContext) {
        let mut data = ctx.open(FixedClock::ticking(start(), Duration::seconds(1)));
        let essay = data.add(essay());
        data.update(&essay.id, TaskPatch::completed(true));
        data.add(NewGoal::new("Read 10 books", date(2025, 12, 31)));

        let reader = Collections::open(&ctx.db_path()).unwrap();
        let tasks: Vec<Task> = load_collection(&reader).unwrap();
        let goals: Vec<Goal> = load_collection(&reader).unwrap();
        assert_eq!(tasks.as_slice(), data.tasks());
        assert_eq!(goals.as_slice(), data.goals());

        let raw = reader.load(Collection::Tasks.key()).unwrap().unwrap();
        assert!(raw.starts_with(&format!("{{\"version\":{}", PAYLOAD_VERSION)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_state_survives_reopen(ctx: &mut StoreTestContext) {
        let essay = {
            let mut data = ctx.open(FixedClock::new(start()));
            data.add(essay())
        };

        let mut data = ctx.open(FixedClock::new(start()));
        assert_eq!(data.tasks(), &[essay.clone()]);

        // Same clock reading as the first session, the id must still be fresh
        let next = data.add(NewTask::new("Lab report", date(2025, 8, 3)));
        assert_ne!(next.id, essay.id);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_default_store_uses_data_directory(_ctx: &mut StoreTestContext) {
        let mut data = DataContext::open_default().unwrap();
        let task = data.add(essay());

        let reopened = DataContext::open_default().unwrap();
        assert!(reopened.task(&task.id).is_some());
    }

    #[test]
    fn test_observers_fire_once_per_effective_mutation() {
        let mut data = DataContext::with_clock(Box::new(MemoryStore::new()), Box::new(FixedClock::new(start())));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        data.subscribe(move |collection| sink.borrow_mut().push(collection));

        let task = data.add(essay());
        data.update(&task.id, TaskPatch::completed(true));
        data.update("missing", TaskPatch::completed(true));
        data.add(NewGoal::new("Read 10 books", date(2025, 12, 31)));
        data.delete::<Task>(&task.id);
        data.delete::<Task>(&task.id);

        assert_eq!(
            *seen.borrow(),
            vec![Collection::Tasks, Collection::Tasks, Collection::Goals, Collection::Tasks]
        );
        assert_eq!(data.version(), 4);
    }

    #[test]
    fn test_write_failures_keep_memory_state() {
        let store = MemoryStore::read_only(HashMap::new());
        let mut data = DataContext::with_clock(Box::new(store), Box::new(FixedClock::new(start())));

        let task = data.add(essay());
        data.update(&task.id, TaskPatch::completed(true));

        assert!(data.task(&task.id).unwrap().completed);
    }

    #[test]
    fn test_undecodable_collection_starts_empty() {
        let store = MemoryStore::new()
            .with_payload(Collection::Tasks.key(), r#"{"version":99,"records":[]}"#)
            .with_payload(Collection::Goals.key(), "not json");
        let data = DataContext::open(Box::new(store));

        assert!(data.tasks().is_empty());
        assert!(data.goals().is_empty());
        assert!(data.events().is_empty());
    }
}
