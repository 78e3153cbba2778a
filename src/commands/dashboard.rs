use super::local_now;
use crate::{
    libs::{
        config::Config,
        context::DataContext,
        messages::Message,
        productivity::{due_soon, goals_by_target_date, upcoming_deadlines, upcoming_events},
        summary::DashboardSummary,
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let limits = Config::read()?.dashboard_or_default();
    let ctx = DataContext::open_default()?;
    let data = ctx.snapshot();
    let now = local_now();

    msg_print!(Message::DashboardHeader(now.format("%A, %B %-d, %Y").to_string()), true);
    View::summary(&DashboardSummary::compute(data, now))?;

    for reminder in due_soon(&data.tasks, now) {
        msg_warning!(Message::TaskDueSoon(reminder.task.title.clone(), reminder.hours_left));
    }

    let deadlines = upcoming_deadlines(&data.tasks, now, limits.upcoming_deadlines_limit);
    if deadlines.is_empty() {
        msg_info!(Message::NoUpcomingDeadlines);
    } else {
        msg_print!(Message::UpcomingDeadlinesHeader, true);
        View::tasks(&deadlines)?;
    }

    let events = upcoming_events(&data.events, now, limits.upcoming_events_limit);
    if events.is_empty() {
        msg_info!(Message::NoUpcomingEvents);
    } else {
        msg_print!(Message::UpcomingEventsHeader, true);
        View::events(&events)?;
    }

    let goals = goals_by_target_date(&data.goals);
    if !goals.is_empty() {
        msg_print!(Message::GoalProgressHeader, true);
        View::goals(&goals, now)?;
    }

    Ok(())
}
