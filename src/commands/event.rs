use super::{local_now, parse_date, require_title};
use crate::{
    libs::{
        calendar::TASK_ENTRY_PREFIX,
        context::DataContext,
        entity::Patch,
        event::{parse_time, CalendarEvent, EventKind, EventPatch, NewEvent},
        messages::Message,
        productivity::upcoming_events,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EventArgs {
    #[command(subcommand)]
    command: EventCommand,
}

#[derive(Debug, Subcommand)]
enum EventCommand {
    /// Schedule an event
    Add {
        title: String,
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short = 'k', long = "type", value_enum, default_value_t = EventKind::Event)]
        kind: EventKind,
    },
    /// List events, all or only upcoming ones
    List {
        #[arg(short, long)]
        upcoming: bool,
    },
    /// Change fields of an event
    Edit {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        #[arg(short = 'k', long = "type", value_enum)]
        kind: Option<EventKind>,
    },
    /// Delete an event
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: EventArgs) -> Result<()> {
    let mut ctx = DataContext::open_default()?;

    match args.command {
        EventCommand::Add {
            title,
            date,
            time,
            description,
            kind,
        } => {
            let event = ctx.add(NewEvent {
                title: require_title(&title)?,
                description,
                date,
                time,
                kind,
            });
            msg_success!(Message::EventCreated(event.title));
        }
        EventCommand::List { upcoming } => {
            let events: Vec<&CalendarEvent> = if upcoming {
                upcoming_events(ctx.events(), local_now(), usize::MAX)
            } else {
                let mut all: Vec<&CalendarEvent> = ctx.events().iter().collect();
                all.sort_by_key(|e| (e.date, e.time));
                all
            };
            if events.is_empty() {
                msg_info!(if upcoming { Message::NoUpcomingEvents } else { Message::EventsNotFound });
                return Ok(());
            }
            msg_print!(if upcoming { Message::UpcomingEventsHeader } else { Message::EventsHeader }, true);
            View::events(&events)?;
        }
        EventCommand::Edit {
            id,
            title,
            description,
            date,
            time,
            kind,
        } => {
            if id.starts_with(TASK_ENTRY_PREFIX) {
                msg_error!(Message::EventIsTaskDeadline(id));
                return Ok(());
            }
            let patch = EventPatch {
                title: title.map(|t| require_title(&t)).transpose()?,
                description,
                date,
                time,
                kind,
            };
            if patch.is_empty() {
                msg_info!(Message::NothingToUpdate);
                return Ok(());
            }
            if ctx.event(&id).is_none() {
                msg_error!(Message::EventNotFound(id));
                return Ok(());
            }
            ctx.update(&id, patch);
            if let Some(event) = ctx.event(&id) {
                msg_success!(Message::EventUpdated(event.title.clone()));
            }
        }
        EventCommand::Delete { id, yes } => {
            if id.starts_with(TASK_ENTRY_PREFIX) {
                msg_error!(Message::EventIsTaskDeadline(id));
                return Ok(());
            }
            let Some(event) = ctx.event(&id).cloned() else {
                msg_error!(Message::EventNotFound(id));
                return Ok(());
            };
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteEvent(event.title.clone()).to_string())
                    .default(false)
                    .interact()?;
            if confirmed {
                ctx.delete::<CalendarEvent>(&id);
                msg_success!(Message::EventDeleted(event.title));
            } else {
                msg_info!(Message::OperationCancelled);
            }
        }
    }

    Ok(())
}
