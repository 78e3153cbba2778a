//! Headline figures shown on the dashboard and profile.

use super::entity::Dataset;
use super::productivity;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub completion_rate: f64,
    pub total_goals: usize,
    pub completed_goals: usize,
    pub average_goal_progress: f64,
    pub upcoming_events: usize,
    pub overdue_tasks: usize,
}

impl DashboardSummary {
    pub fn compute(data: &Dataset, now: NaiveDateTime) -> Self {
        DashboardSummary {
            total_tasks: data.tasks.len(),
            completed_tasks: productivity::completed_count(&data.tasks),
            completion_rate: productivity::completion_rate(&data.tasks),
            total_goals: data.goals.len(),
            completed_goals: productivity::completed_goals(&data.goals),
            average_goal_progress: productivity::average_goal_progress(&data.goals),
            upcoming_events: productivity::upcoming_events(&data.events, now, usize::MAX).len(),
            overdue_tasks: productivity::overdue_count(&data.tasks, now),
        }
    }
}
