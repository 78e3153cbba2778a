use super::{local_now, parse_date, require_title};
use crate::{
    libs::{
        context::DataContext,
        entity::Patch,
        goal::{Goal, GoalPatch, NewGoal, PROGRESS_MAX},
        messages::Message,
        productivity::goals_by_target_date,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    command: GoalCommand,
}

#[derive(Debug, Subcommand)]
enum GoalCommand {
    /// Set a new goal
    Add {
        title: String,
        #[arg(long, value_parser = parse_date)]
        target: NaiveDate,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long, default_value = "")]
        category: String,
        #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=PROGRESS_MAX as i64))]
        progress: u8,
    },
    /// List goals by target date
    List,
    /// Change fields of a goal
    Edit {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_date)]
        target: Option<NaiveDate>,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Set goal progress in percent, rounded to steps of 5
    Progress {
        id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=PROGRESS_MAX as i64))]
        value: u8,
    },
    /// Delete a goal
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: GoalArgs) -> Result<()> {
    let mut ctx = DataContext::open_default()?;

    match args.command {
        GoalCommand::Add {
            title,
            target,
            description,
            category,
            progress,
        } => {
            let goal = ctx.add(NewGoal {
                title: require_title(&title)?,
                description,
                target_date: target,
                progress,
                category,
            });
            msg_success!(Message::GoalCreated(goal.title));
        }
        GoalCommand::List => {
            let goals = goals_by_target_date(ctx.goals());
            if goals.is_empty() {
                msg_info!(Message::GoalsNotFound);
                return Ok(());
            }
            msg_print!(Message::GoalsHeader, true);
            View::goals(&goals, local_now())?;
        }
        GoalCommand::Edit {
            id,
            title,
            description,
            target,
            category,
        } => {
            let patch = GoalPatch {
                title: title.map(|t| require_title(&t)).transpose()?,
                description,
                target_date: target,
                progress: None,
                category,
            };
            if patch.is_empty() {
                msg_info!(Message::NothingToUpdate);
                return Ok(());
            }
            if ctx.goal(&id).is_none() {
                msg_error!(Message::GoalNotFound(id));
                return Ok(());
            }
            ctx.update(&id, patch);
            if let Some(goal) = ctx.goal(&id) {
                msg_success!(Message::GoalUpdated(goal.title.clone()));
            }
        }
        GoalCommand::Progress { id, value } => {
            if ctx.goal(&id).is_none() {
                msg_error!(Message::GoalNotFound(id));
                return Ok(());
            }
            ctx.update(&id, GoalPatch::progress(value));
            if let Some(goal) = ctx.goal(&id) {
                msg_success!(Message::GoalProgressUpdated(goal.title.clone(), goal.progress));
            }
        }
        GoalCommand::Delete { id, yes } => {
            let Some(goal) = ctx.goal(&id).cloned() else {
                msg_error!(Message::GoalNotFound(id));
                return Ok(());
            };
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteGoal(goal.title.clone()).to_string())
                    .default(false)
                    .interact()?;
            if confirmed {
                ctx.delete::<Goal>(&id);
                msg_success!(Message::GoalDeleted(goal.title));
            } else {
                msg_info!(Message::OperationCancelled);
            }
        }
    }

    Ok(())
}
