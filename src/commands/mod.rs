//! Command-line interface.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and a
//! `cmd` entry point. Input is validated here, before anything reaches the
//! data context.

pub mod calendar;
pub mod chat;
pub mod dashboard;
pub mod data;
pub mod event;
pub mod goal;
pub mod init;
pub mod migrations;
pub mod profile;
pub mod quote;
pub mod reminders;
pub mod serve;
pub mod task;

use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Manage goals", arg_required_else_help = true)]
    Goal(goal::GoalArgs),
    #[command(about = "Manage calendar events", arg_required_else_help = true)]
    Event(event::EventArgs),
    #[command(about = "Show progress overview")]
    Dashboard,
    #[command(about = "Show a month calendar with deadlines")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Show tasks due within 24 hours")]
    Reminders,
    #[command(about = "Show statistics and recent activity")]
    Profile,
    #[command(about = "Get a motivational quote")]
    Quote,
    #[command(about = "Ask the study assistant", arg_required_else_help = true)]
    Chat(chat::ChatArgs),
    #[command(about = "Run the chat and quote proxy server")]
    Serve(serve::ServeArgs),
    #[command(about = "Export or import all data", arg_required_else_help = true)]
    Data(data::DataArgs),
    #[command(about = "Inspect database migrations", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Goal(args) => goal::cmd(args),
            Commands::Event(args) => event::cmd(args),
            Commands::Dashboard => dashboard::cmd(),
            Commands::Calendar(args) => calendar::cmd(args),
            Commands::Reminders => reminders::cmd(),
            Commands::Profile => profile::cmd(),
            Commands::Quote => quote::cmd().await,
            Commands::Chat(args) => chat::cmd(args).await,
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Data(args) => data::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// The instant time-dependent views compare against.
pub(crate) fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// clap value parser for `YYYY-MM-DD` dates.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", value, e))
}

/// Trimmed title, or an error if nothing is left.
pub(crate) fn require_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        msg_bail_anyhow!(Message::EmptyTitle);
    }
    Ok(title.to_string())
}
