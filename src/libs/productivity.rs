//! Progress figures and filtered lists derived from the collections.
//!
//! Everything here is a pure function of the records and an explicit `now`,
//! a local wall-clock instant. Due dates count from the start of the day, so
//! a task due on 2025-08-01 is overdue from 2025-08-01 00:00 onward.
//!
//! ```rust
//! use studymate::libs::productivity::completion_rate;
//!
//! assert_eq!(completion_rate(&[]), 0.0);
//! ```

use super::event::CalendarEvent;
use super::goal::Goal;
use super::task::{Task, TaskFilter};
use chrono::{Duration, NaiveDateTime};

/// Window for due-soon reminders.
pub const REMINDER_WINDOW_HOURS: i64 = 24;

/// Percentage of completed tasks, 0 for an empty list.
pub fn completion_rate(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    completed_count(tasks) as f64 / tasks.len() as f64 * 100.0
}

pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.completed).count()
}

/// Mean goal progress, 0 when there are no goals.
pub fn average_goal_progress(goals: &[Goal]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    let total: u32 = goals.iter().map(|g| g.progress as u32).sum();
    total as f64 / goals.len() as f64
}

pub fn completed_goals(goals: &[Goal]) -> usize {
    goals.iter().filter(|g| g.is_completed()).count()
}

pub fn overdue_count(tasks: &[Task], now: NaiveDateTime) -> usize {
    tasks.iter().filter(|t| t.is_overdue(now)).count()
}

/// Incomplete tasks due after `now`, soonest first.
pub fn upcoming_deadlines(tasks: &[Task], now: NaiveDateTime, limit: usize) -> Vec<&Task> {
    let mut upcoming: Vec<&Task> = tasks.iter().filter(|t| t.is_upcoming(now)).collect();
    upcoming.sort_by_key(|t| t.due_date);
    upcoming.truncate(limit);
    upcoming
}

/// A pending task due within the reminder window.
#[derive(Debug, Clone, PartialEq)]
pub struct DueSoon<'a> {
    pub task: &'a Task,
    pub hours_left: i64,
}

/// Incomplete tasks due in more than zero and at most 24 hours.
pub fn due_soon(tasks: &[Task], now: NaiveDateTime) -> Vec<DueSoon<'_>> {
    let mut reminders: Vec<DueSoon> = tasks
        .iter()
        .filter(|t| !t.completed)
        .filter_map(|task| {
            let left = task.due_at() - now;
            if left > Duration::zero() && left <= Duration::hours(REMINDER_WINDOW_HOURS) {
                Some(DueSoon {
                    task,
                    hours_left: left.num_hours(),
                })
            } else {
                None
            }
        })
        .collect();
    reminders.sort_by_key(|r| r.task.due_date);
    reminders
}

pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Goals ordered by target date, earliest first.
pub fn goals_by_target_date(goals: &[Goal]) -> Vec<&Goal> {
    let mut sorted: Vec<&Goal> = goals.iter().collect();
    sorted.sort_by_key(|g| g.target_date);
    sorted
}

/// Events from today on, in date and time order.
///
/// Unlike [`upcoming_deadlines`], this compares calendar dates, not the
/// start-of-day instant, so events later today still count as upcoming.
pub fn upcoming_events(events: &[CalendarEvent], now: NaiveDateTime, limit: usize) -> Vec<&CalendarEvent> {
    let today = now.date();
    let mut upcoming: Vec<&CalendarEvent> = events.iter().filter(|e| e.date >= today).collect();
    upcoming.sort_by_key(|e| (e.date, e.time));
    upcoming.truncate(limit);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::NewTask;
    use crate::libs::entity::Draft;
    use chrono::{NaiveDate, Utc};

    fn task(id: &str, due: (i32, u32, u32), completed: bool) -> Task {
        let mut draft = NewTask::new(id, NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap());
        draft.completed = completed;
        draft.into_record(id.to_string(), Utc::now())
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn reminder_window_excludes_due_now_and_past() {
        let tasks = vec![
            task("tomorrow", (2025, 8, 1), false),
            task("today", (2025, 7, 31), false),
            task("done", (2025, 8, 1), true),
            task("later", (2025, 8, 3), false),
        ];
        let reminders = due_soon(&tasks, at(2025, 7, 31, 18));
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].task.id, "tomorrow");
        assert_eq!(reminders[0].hours_left, 6);
    }

    #[test]
    fn deadline_at_window_edge_is_included() {
        let tasks = vec![task("edge", (2025, 8, 1), false)];
        assert_eq!(due_soon(&tasks, at(2025, 7, 31, 0)).len(), 1);
    }
}
