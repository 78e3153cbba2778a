//! Recent activity feed for the profile view.

use super::entity::Dataset;
use chrono::{DateTime, Utc};
use std::fmt;

pub const RECENT_TASKS: usize = 5;
pub const RECENT_GOALS: usize = 3;
pub const RECENT_EVENTS: usize = 3;
pub const ACTIVITY_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Task,
    Goal,
    Event,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ActivityKind::Task => "task",
            ActivityKind::Goal => "goal",
            ActivityKind::Event => "event",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub summary: String,
    pub at: DateTime<Utc>,
}

fn last<T>(records: &[T], n: usize) -> &[T] {
    &records[records.len().saturating_sub(n)..]
}

/// The newest entries from the tail of each collection, newest first.
///
/// Only the last few records of each collection are considered, in stored
/// order, before the merged list is sorted by creation time.
pub fn recent_activity(data: &Dataset, limit: usize) -> Vec<Activity> {
    let tasks = last(&data.tasks, RECENT_TASKS).iter().map(|task| Activity {
        kind: ActivityKind::Task,
        summary: if task.completed {
            format!("Completed: {}", task.title)
        } else {
            format!("Created: {}", task.title)
        },
        at: task.created_at,
    });
    let goals = last(&data.goals, RECENT_GOALS).iter().map(|goal| Activity {
        kind: ActivityKind::Goal,
        summary: format!("Goal: {} ({}%)", goal.title, goal.progress),
        at: goal.created_at,
    });
    let events = last(&data.events, RECENT_EVENTS).iter().map(|event| Activity {
        kind: ActivityKind::Event,
        summary: format!("Event: {}", event.title),
        at: event.created_at,
    });

    let mut feed: Vec<Activity> = tasks.chain(goals).chain(events).collect();
    feed.sort_by(|a, b| b.at.cmp(&a.at));
    feed.truncate(limit);
    feed
}
