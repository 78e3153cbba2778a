/// Every piece of user-facing text the application prints.
///
/// Variants carry the values they interpolate; the text itself lives in
/// `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String), // title
    TaskUpdated(String), // title
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TaskNotFound(String), // id
    TasksHeader,
    TasksNotFound,
    ConfirmDeleteTask(String),
    UpcomingDeadlinesHeader,
    NoUpcomingDeadlines,
    RemindersHeader,
    NoReminders,
    TaskDueSoon(String, i64), // title, hours left

    // === GOAL MESSAGES ===
    GoalCreated(String),
    GoalUpdated(String),
    GoalProgressUpdated(String, u8), // title, progress
    GoalDeleted(String),
    GoalNotFound(String),
    GoalsHeader,
    GoalsNotFound,
    GoalProgressHeader,
    ConfirmDeleteGoal(String),

    // === EVENT MESSAGES ===
    EventCreated(String),
    EventUpdated(String),
    EventDeleted(String),
    EventNotFound(String),
    EventIsTaskDeadline(String), // pseudo-event id
    EventsHeader,
    EventsNotFound,
    UpcomingEventsHeader,
    NoUpcomingEvents,
    ConfirmDeleteEvent(String),

    // === DASHBOARD MESSAGES ===
    DashboardHeader(String), // date
    CalendarHeader(String),  // month
    ProfileHeader,
    RecentActivityHeader,
    NoRecentActivity,
    InvalidMonth(String),
    NothingToUpdate,
    EmptyTitle,

    // === QUOTE / CHAT MESSAGES ===
    QuoteOfTheDay,
    ChatMissingApiKey(String), // env var
    ChatFailed(String),

    // === SERVER MESSAGES ===
    ServerStarting(String), // address
    ServerStopHint,
    ServerStopped,
    InvalidHostAddress(String, String), // host, error

    // === DATA MESSAGES ===
    DataExported(String, usize, usize, usize), // path, tasks, goals, events
    DataImported(usize, usize, usize),
    ImportCollectionMissing(String),
    ImportDuplicateId(String, String), // collection, id
    ConfirmImportReplace,
    StorePersistFailed(String, String), // collection, error
    StoreLoadFailed(String, String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleChat,
    ConfigModuleQuote,
    ConfigModuleServer,
    ConfigModuleDashboard,

    // === PROMPTS ===
    PromptSelectModules,
    PromptChatApiUrl,
    PromptChatModel,
    PromptChatSystemPrompt,
    PromptChatTemperature,
    PromptRequestTimeout,
    PromptQuoteApiUrl,
    PromptServerHost,
    PromptServerPort,
    PromptUpcomingDeadlinesLimit,
    PromptUpcomingEventsLimit,
    PromptActivityLimit,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    PayloadVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
