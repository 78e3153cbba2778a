//! Month grid and timeline combining events with task deadlines.
//!
//! Incomplete tasks show up on their due day as read-only deadline entries.
//! Those entries carry [`EntrySource::Task`] so nothing mistakes them for
//! stored calendar events.

use super::event::{CalendarEvent, EventKind};
use super::task::Task;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

/// Id prefix of entries derived from tasks.
pub const TASK_ENTRY_PREFIX: &str = "task-";
pub const TASK_ENTRY_SUFFIX: &str = " (Task Due)";
pub const GRID_DAYS: usize = 42;
pub const TIMELINE_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    Event,
    Task,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: EventKind,
    pub source: EntrySource,
}

impl CalendarEntry {
    pub fn is_editable(&self) -> bool {
        self.source == EntrySource::Event
    }
}

impl From<&CalendarEvent> for CalendarEntry {
    fn from(event: &CalendarEvent) -> Self {
        CalendarEntry {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            time: event.time,
            kind: event.kind,
            source: EntrySource::Event,
        }
    }
}

impl From<&Task> for CalendarEntry {
    fn from(task: &Task) -> Self {
        CalendarEntry {
            id: format!("{}{}", TASK_ENTRY_PREFIX, task.id),
            title: format!("{}{}", task.title, TASK_ENTRY_SUFFIX),
            description: task.description.clone(),
            date: task.due_date,
            time: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default(),
            kind: EventKind::Deadline,
            source: EntrySource::Task,
        }
    }
}

/// Stored events followed by deadline entries for incomplete tasks.
pub fn entries(events: &[CalendarEvent], tasks: &[Task]) -> Vec<CalendarEntry> {
    events
        .iter()
        .map(CalendarEntry::from)
        .chain(tasks.iter().filter(|t| !t.completed).map(CalendarEntry::from))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub entries: Vec<CalendarEntry>,
}

/// Six full weeks covering `month`, starting on the Sunday on or before the
/// first. Returns `None` for an invalid year/month.
pub fn month_grid(year: i32, month: u32, today: NaiveDate, events: &[CalendarEvent], tasks: &[Task]) -> Option<Vec<CalendarDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let all = entries(events, tasks);

    let days = start
        .iter_days()
        .take(GRID_DAYS)
        .map(|date| CalendarDay {
            date,
            is_current_month: date.month() == month && date.year() == year,
            is_today: date == today,
            entries: all.iter().filter(|e| e.date == date).cloned().collect(),
        })
        .collect();

    Some(days)
}

/// Entries dated today or later, soonest first.
pub fn upcoming_timeline(events: &[CalendarEvent], tasks: &[Task], today: NaiveDate, limit: usize) -> Vec<CalendarEntry> {
    let mut upcoming: Vec<CalendarEntry> = entries(events, tasks).into_iter().filter(|e| e.date >= today).collect();
    upcoming.sort_by_key(|e| (e.date, e.time));
    upcoming.truncate(limit);
    upcoming
}
