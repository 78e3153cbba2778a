use super::local_now;
use crate::{
    libs::{
        calendar::{month_grid, upcoming_timeline, TIMELINE_LIMIT},
        context::DataContext,
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    /// Month to show as YYYY-MM, the current month by default
    #[arg(short, long)]
    month: Option<String>,
}

/// Parses `YYYY-MM` into a year and month.
pub fn parse_month(value: &str) -> Option<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()?;
    Some((first.year(), first.month()))
}

pub fn cmd(args: CalendarArgs) -> Result<()> {
    let today = local_now().date();
    let (year, month) = match args.month {
        Some(value) => match parse_month(&value) {
            Some(ym) => ym,
            None => msg_bail_anyhow!(Message::InvalidMonth(value)),
        },
        None => (today.year(), today.month()),
    };

    let ctx = DataContext::open_default()?;
    let Some(days) = month_grid(year, month, today, ctx.events(), ctx.tasks()) else {
        msg_bail_anyhow!(Message::InvalidMonth(format!("{}-{:02}", year, month)));
    };

    msg_print!(Message::CalendarHeader(format!("{}-{:02}", year, month)), true);
    View::calendar(&days)?;

    let timeline = upcoming_timeline(ctx.events(), ctx.tasks(), today, TIMELINE_LIMIT);
    if timeline.is_empty() {
        msg_info!(Message::NoUpcomingEvents);
    } else {
        msg_print!(Message::UpcomingEventsHeader, true);
        View::timeline(&timeline)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_argument_is_year_and_month() {
        assert_eq!(parse_month("2025-08"), Some((2025, 8)));
        assert_eq!(parse_month("2025-13"), None);
        assert_eq!(parse_month("August"), None);
    }
}
