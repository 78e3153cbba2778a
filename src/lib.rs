//! # studymate
//!
//! A command-line study planner: tasks with due dates and priorities, goals
//! with progress, and a calendar of events, stored locally in SQLite. It also
//! ships a small HTTP proxy for an AI study assistant and daily quotes.
//!
//! ## Features
//!
//! - **Tasks, goals and events**: add, edit, complete and delete from the CLI
//! - **Dashboard**: completion rate, overdue count, upcoming deadlines
//! - **Calendar**: month grid with task deadlines next to events
//! - **Reminders**: tasks due within the next 24 hours
//! - **Proxy server**: chat completion and quote endpoints for browser clients
//! - **Import/export**: JSON files, including browser dashboard exports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studymate::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
