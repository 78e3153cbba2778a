#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
    use studymate::libs::calendar::{
        entries, month_grid, upcoming_timeline, EntrySource, GRID_DAYS, TASK_ENTRY_PREFIX, TIMELINE_LIMIT,
    };
    use studymate::libs::entity::Draft;
    use studymate::libs::event::{CalendarEvent, EventKind, NewEvent};
    use studymate::libs::task::{NewTask, Task};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, title: &str, due: NaiveDate, completed: bool) -> Task {
        let draft = NewTask {
            completed,
            ..NewTask::new(title, due)
        };
        draft.into_record(id.to_string(), Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap())
    }

    fn event(id: &str, title: &str, on: NaiveDate, hour: u32) -> CalendarEvent {
        NewEvent::new(title, on, NaiveTime::from_hms_opt(hour, 0, 0).unwrap())
            .into_record(id.to_string(), Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_pending_task_appears_as_deadline_entry() {
        let due = date(2025, 8, 1);
        let tasks = vec![task("7", "Essay", due, false), task("8", "Reading", due, true)];
        let grid = month_grid(2025, 8, date(2025, 7, 31), &[], &tasks).unwrap();

        let day = grid.iter().find(|d| d.date == due).unwrap();
        assert_eq!(day.entries.len(), 1);

        let entry = &day.entries[0];
        assert_eq!(entry.id, format!("{}7", TASK_ENTRY_PREFIX));
        assert_eq!(entry.title, "Essay (Task Due)");
        assert_eq!(entry.time, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert_eq!(entry.kind, EventKind::Deadline);
        assert_eq!(entry.source, EntrySource::Task);
        assert!(!entry.is_editable());
    }

    #[test]
    fn test_grid_covers_six_weeks_from_sunday() {
        let grid = month_grid(2025, 2, date(2025, 2, 14), &[], &[]).unwrap();

        assert_eq!(grid.len(), GRID_DAYS);
        assert_eq!(grid[0].date.weekday(), Weekday::Sun);
        assert_eq!(grid[0].date, date(2025, 1, 26));
        assert_eq!(grid.iter().filter(|d| d.is_current_month).count(), 28);
        assert_eq!(grid.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_month_starting_on_sunday_begins_grid() {
        // 2025-06-01 is a Sunday
        let grid = month_grid(2025, 6, date(2025, 6, 1), &[], &[]).unwrap();
        assert_eq!(grid[0].date, date(2025, 6, 1));
        assert!(grid[0].is_current_month);
    }

    #[test]
    fn test_events_are_bucketed_by_date() {
        let events = vec![event("1", "Exam", date(2025, 8, 5), 9), event("2", "Club", date(2025, 8, 5), 17)];
        let grid = month_grid(2025, 8, date(2025, 8, 1), &events, &[]).unwrap();

        let day = grid.iter().find(|d| d.date == date(2025, 8, 5)).unwrap();
        assert_eq!(day.entries.len(), 2);
        assert!(day.entries.iter().all(|e| e.source == EntrySource::Event && e.is_editable()));
    }

    #[test]
    fn test_entries_skip_completed_tasks() {
        let tasks = vec![task("1", "Done", date(2025, 8, 1), true)];
        assert!(entries(&[], &tasks).is_empty());
    }

    #[test]
    fn test_timeline_starts_today_and_is_capped() {
        let today = date(2025, 8, 1);
        let mut events: Vec<CalendarEvent> = (0..12)
            .map(|i| event(&i.to_string(), &format!("Session {}", i), date(2025, 8, 2 + i), 9))
            .collect();
        events.push(event("old", "Past", date(2025, 7, 30), 9));
        let tasks = vec![task("9", "Essay", today, false)];

        let timeline = upcoming_timeline(&events, &tasks, today, TIMELINE_LIMIT);
        assert_eq!(timeline.len(), TIMELINE_LIMIT);
        assert_eq!(timeline[0].title, "Essay (Task Due)");
        assert_eq!(timeline[1].title, "Session 0");
        assert!(timeline.iter().all(|e| e.date >= today));
    }
}
