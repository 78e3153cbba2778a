use super::local_now;
use crate::{
    libs::{context::DataContext, messages::Message, productivity::due_soon, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let ctx = DataContext::open_default()?;
    let reminders = due_soon(ctx.tasks(), local_now());

    if reminders.is_empty() {
        msg_info!(Message::NoReminders);
        return Ok(());
    }

    msg_print!(Message::RemindersHeader, true);
    View::reminders(&reminders)?;
    Ok(())
}
