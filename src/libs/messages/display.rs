//! Display implementation for studymate messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between commands and the proxy server.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as pending", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksNotFound => "No tasks found. Add one with `studymate task add`.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::UpcomingDeadlinesHeader => "Upcoming deadlines:".to_string(),
            Message::NoUpcomingDeadlines => "No upcoming deadlines".to_string(),
            Message::RemindersHeader => "Due within the next 24 hours:".to_string(),
            Message::NoReminders => "Nothing is due within the next 24 hours".to_string(),
            Message::TaskDueSoon(title, hours) => format!("'{}' is due in {} hour(s)", title, hours),

            // === GOAL MESSAGES ===
            Message::GoalCreated(title) => format!("Goal '{}' created", title),
            Message::GoalUpdated(title) => format!("Goal '{}' updated", title),
            Message::GoalProgressUpdated(title, progress) => format!("Goal '{}' is now at {}%", title, progress),
            Message::GoalDeleted(title) => format!("Goal '{}' deleted", title),
            Message::GoalNotFound(id) => format!("Goal with ID {} not found", id),
            Message::GoalsHeader => "Goals:".to_string(),
            Message::GoalsNotFound => "No goals set yet".to_string(),
            Message::GoalProgressHeader => "Goal progress:".to_string(),
            Message::ConfirmDeleteGoal(title) => format!("Delete goal '{}'?", title),

            // === EVENT MESSAGES ===
            Message::EventCreated(title) => format!("Event '{}' created", title),
            Message::EventUpdated(title) => format!("Event '{}' updated", title),
            Message::EventDeleted(title) => format!("Event '{}' deleted", title),
            Message::EventNotFound(id) => format!("Event with ID {} not found", id),
            Message::EventIsTaskDeadline(id) => {
                format!("'{}' is a task deadline shown on the calendar; edit the task instead", id)
            }
            Message::EventsHeader => "Events:".to_string(),
            Message::EventsNotFound => "No events scheduled".to_string(),
            Message::UpcomingEventsHeader => "Upcoming events:".to_string(),
            Message::NoUpcomingEvents => "No upcoming events".to_string(),
            Message::ConfirmDeleteEvent(title) => format!("Delete event '{}'?", title),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(date) => format!("Academic progress for {}", date),
            Message::CalendarHeader(month) => format!("Calendar for {}", month),
            Message::ProfileHeader => "Profile statistics:".to_string(),
            Message::RecentActivityHeader => "Recent activity:".to_string(),
            Message::NoRecentActivity => "No recent activity".to_string(),
            Message::InvalidMonth(value) => format!("Invalid month '{}', expected YYYY-MM", value),
            Message::NothingToUpdate => "No fields to update were given".to_string(),
            Message::EmptyTitle => "Title must not be empty".to_string(),

            // === QUOTE / CHAT MESSAGES ===
            Message::QuoteOfTheDay => "Daily motivation:".to_string(),
            Message::ChatMissingApiKey(var) => format!("Missing GROQ API key. Set {} in the environment or a .env file.", var),
            Message::ChatFailed(error) => format!("Error communicating with the study assistant: {}", error),

            // === SERVER MESSAGES ===
            Message::ServerStarting(addr) => format!("Starting studymate proxy at http://{}", addr),
            Message::ServerStopHint => "Press Ctrl+C to stop".to_string(),
            Message::ServerStopped => "Proxy server stopped".to_string(),
            Message::InvalidHostAddress(host, error) => format!("Invalid host address '{}': {}", host, error),

            // === DATA MESSAGES ===
            Message::DataExported(path, tasks, goals, events) => {
                format!("Exported {} task(s), {} goal(s) and {} event(s) to {}", tasks, goals, events, path)
            }
            Message::DataImported(tasks, goals, events) => {
                format!("Imported {} task(s), {} goal(s) and {} event(s)", tasks, goals, events)
            }
            Message::ImportCollectionMissing(name) => format!("No '{}' collection in the import file, keeping it empty", name),
            Message::ImportDuplicateId(collection, id) => {
                format!("Skipping a repeated {} record with ID {}, the first one is kept", collection, id)
            }
            Message::ConfirmImportReplace => "Importing replaces all current tasks, goals and events. Continue?".to_string(),
            Message::StorePersistFailed(collection, error) => format!("Failed to save {}: {}", collection, error),
            Message::StoreLoadFailed(collection, error) => format!("Failed to load {}: {}", collection, error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleChat => "Study assistant chat settings".to_string(),
            Message::ConfigModuleQuote => "Daily quote settings".to_string(),
            Message::ConfigModuleServer => "Proxy server settings".to_string(),
            Message::ConfigModuleDashboard => "Dashboard settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptChatApiUrl => "Chat completion API URL".to_string(),
            Message::PromptChatModel => "Model identifier".to_string(),
            Message::PromptChatSystemPrompt => "System prompt".to_string(),
            Message::PromptChatTemperature => "Sampling temperature".to_string(),
            Message::PromptRequestTimeout => "Request timeout (seconds)".to_string(),
            Message::PromptQuoteApiUrl => "Random quote API URL".to_string(),
            Message::PromptServerHost => "Host to bind".to_string(),
            Message::PromptServerPort => "Port to listen on".to_string(),
            Message::PromptUpcomingDeadlinesLimit => "Upcoming deadlines to show".to_string(),
            Message::PromptUpcomingEventsLimit => "Upcoming events to show".to_string(),
            Message::PromptActivityLimit => "Recent activity entries to show".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::PayloadVersion(version) => format!("Collection payload version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };
        write!(f, "{}", text)
    }
}
