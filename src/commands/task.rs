use super::{parse_date, require_title};
use crate::{
    libs::{
        context::DataContext,
        entity::Patch,
        messages::Message,
        productivity::filter_tasks,
        task::{NewTask, Priority, StatusFilter, Task, TaskFilter, TaskPatch},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task
    Add {
        title: String,
        #[arg(long, value_parser = parse_date)]
        due: NaiveDate,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// List tasks, optionally filtered
    List {
        #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
    },
    /// Change fields of a task
    Edit {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Mark a task as completed, or pending again with --undo
    Done {
        id: String,
        #[arg(long)]
        undo: bool,
    },
    /// Delete a task
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let mut ctx = DataContext::open_default()?;

    match args.command {
        TaskCommand::Add {
            title,
            due,
            description,
            priority,
            category,
        } => {
            let draft = NewTask {
                title: require_title(&title)?,
                description,
                completed: false,
                priority,
                due_date: due,
                category,
            };
            let task = ctx.add(draft);
            msg_success!(Message::TaskCreated(task.title));
        }
        TaskCommand::List { status, priority } => {
            let filter = TaskFilter { status, priority };
            let tasks = filter_tasks(ctx.tasks(), &filter);
            if tasks.is_empty() {
                msg_info!(Message::TasksNotFound);
                return Ok(());
            }
            msg_print!(Message::TasksHeader, true);
            View::tasks(&tasks)?;
        }
        TaskCommand::Edit {
            id,
            title,
            description,
            priority,
            due,
            category,
        } => {
            let patch = TaskPatch {
                title: title.map(|t| require_title(&t)).transpose()?,
                description,
                completed: None,
                priority,
                due_date: due,
                category,
            };
            edit(&mut ctx, &id, patch)?;
        }
        TaskCommand::Done { id, undo } => {
            let Some(task) = ctx.task(&id).cloned() else {
                msg_error!(Message::TaskNotFound(id));
                return Ok(());
            };
            ctx.update(&id, TaskPatch::completed(!undo));
            if undo {
                msg_success!(Message::TaskReopened(task.title));
            } else {
                msg_success!(Message::TaskCompleted(task.title));
            }
        }
        TaskCommand::Delete { id, yes } => {
            let Some(task) = ctx.task(&id).cloned() else {
                msg_error!(Message::TaskNotFound(id));
                return Ok(());
            };
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
                    .default(false)
                    .interact()?;
            if confirmed {
                ctx.delete::<Task>(&id);
                msg_success!(Message::TaskDeleted(task.title));
            } else {
                msg_info!(Message::OperationCancelled);
            }
        }
    }

    Ok(())
}

fn edit(ctx: &mut DataContext, id: &str, patch: TaskPatch) -> Result<()> {
    if patch.is_empty() {
        msg_info!(Message::NothingToUpdate);
        return Ok(());
    }
    if ctx.task(id).is_none() {
        msg_error!(Message::TaskNotFound(id.to_string()));
        return Ok(());
    }

    ctx.update(id, patch);
    if let Some(task) = ctx.task(id) {
        msg_success!(Message::TaskUpdated(task.title.clone()));
    }
    Ok(())
}
