use super::local_now;
use crate::{
    libs::{
        activity::recent_activity, config::Config, context::DataContext, messages::Message, summary::DashboardSummary,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let limits = Config::read()?.dashboard_or_default();
    let ctx = DataContext::open_default()?;
    let data = ctx.snapshot();

    msg_print!(Message::ProfileHeader, true);
    View::summary(&DashboardSummary::compute(data, local_now()))?;

    let feed = recent_activity(data, limits.activity_limit);
    if feed.is_empty() {
        msg_info!(Message::NoRecentActivity);
        return Ok(());
    }

    msg_print!(Message::RecentActivityHeader, true);
    View::activity(&feed)?;
    Ok(())
}
