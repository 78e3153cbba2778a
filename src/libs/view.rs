//! Terminal tables for studymate's lists and summaries.

use super::activity::Activity;
use super::calendar::{CalendarDay, CalendarEntry, EntrySource};
use super::event::CalendarEvent;
use super::goal::Goal;
use super::productivity::DueSoon;
use super::summary::DashboardSummary;
use super::task::Task;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PRIORITY", "DUE", "CATEGORY", "DONE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.priority,
                task.due_date.format(DATE_FORMAT),
                task.category,
                if task.completed { "yes" } else { "no" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn goals(goals: &[&Goal], now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "TARGET", "PROGRESS", "CATEGORY", "STATUS"]);
        for goal in goals {
            let status = if goal.is_completed() {
                "completed"
            } else if goal.is_overdue(now) {
                "overdue"
            } else {
                "in progress"
            };
            table.add_row(row![
                goal.id,
                goal.title,
                goal.target_date.format(DATE_FORMAT),
                format!("{}%", goal.progress),
                goal.category,
                status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn events(events: &[&CalendarEvent]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DATE", "TIME", "TYPE"]);
        for event in events {
            table.add_row(row![
                event.id,
                event.title,
                event.date.format(DATE_FORMAT),
                event.time.format(TIME_FORMAT),
                event.kind
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn reminders(reminders: &[DueSoon]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PRIORITY", "DUE", "HOURS LEFT"]);
        for reminder in reminders {
            table.add_row(row![
                reminder.task.id,
                reminder.task.title,
                reminder.task.priority,
                reminder.task.due_date.format(DATE_FORMAT),
                reminder.hours_left
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &DashboardSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Tasks", format!("{} / {} completed", summary.completed_tasks, summary.total_tasks)]);
        table.add_row(row!["Completion rate", format!("{:.0}%", summary.completion_rate)]);
        table.add_row(row!["Overdue tasks", summary.overdue_tasks]);
        table.add_row(row!["Goals", format!("{} / {} completed", summary.completed_goals, summary.total_goals)]);
        table.add_row(row!["Average goal progress", format!("{:.0}%", summary.average_goal_progress)]);
        table.add_row(row!["Upcoming events", summary.upcoming_events]);
        table.printstd();

        Ok(())
    }

    /// Month grid, one row per week. `*` marks today; days outside the
    /// month are shown in parentheses.
    pub fn calendar(days: &[CalendarDay]) -> Result<()> {
        let mut table = Table::new();

        table.set_titles(WEEKDAYS.iter().collect());
        for week in days.chunks(7) {
            let cells = week.iter().map(|day| {
                let mut label = day.date.format("%d").to_string();
                if !day.is_current_month {
                    label = format!("({})", label);
                }
                if day.is_today {
                    label.push('*');
                }
                let titles: Vec<String> = day.entries.iter().map(Self::entry_label).collect();
                if titles.is_empty() {
                    label
                } else {
                    format!("{}\n{}", label, titles.join("\n"))
                }
            });
            table.add_row(cells.collect());
        }
        table.printstd();

        Ok(())
    }

    pub fn timeline(entries: &[CalendarEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TIME", "TITLE", "TYPE"]);
        for entry in entries {
            table.add_row(row![
                entry.date.format(DATE_FORMAT),
                entry.time.format(TIME_FORMAT),
                Self::entry_label(entry),
                entry.kind
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn activity(feed: &[Activity]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WHEN", "TYPE", "ACTIVITY"]);
        for item in feed {
            table.add_row(row![item.at.format("%Y-%m-%d %H:%M"), item.kind, item.summary]);
        }
        table.printstd();

        Ok(())
    }

    fn entry_label(entry: &CalendarEntry) -> String {
        match entry.source {
            EntrySource::Event => entry.title.clone(),
            EntrySource::Task => format!("! {}", entry.title),
        }
    }
}
