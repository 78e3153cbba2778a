//! Application configuration stored as `config.json` in the data directory.
//!
//! Every section is optional. A missing file or section means defaults, so
//! studymate works without running `studymate init` first.
//!
//! ```rust,no_run
//! use studymate::libs::config::Config;
//!
//! let config = Config::read()?;
//! let server = config.server_or_default();
//! println!("proxy listens on {}:{}", server.host, server.port);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The chat API key is never written here. It comes from the `GROQ_API_KEY`
//! environment variable, which `main` may load from `.env`.

use super::activity::ACTIVITY_LIMIT;
use super::data_storage::DataStorage;
use crate::api::chat::ChatConfig;
use crate::api::quote::QuoteConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding the chat completion API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where `studymate serve` binds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Proxy server".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleServer);
        Ok(Self {
            host: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerHost.to_string())
                .default(default.host)
                .interact_text()?,
            port: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerPort.to_string())
                .default(default.port)
                .interact_text()?,
        })
    }
}

/// List sizes for the dashboard and profile views.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub upcoming_deadlines_limit: usize,
    pub upcoming_events_limit: usize,
    pub activity_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            upcoming_deadlines_limit: 5,
            upcoming_events_limit: 3,
            activity_limit: ACTIVITY_LIMIT,
        }
    }
}

impl DashboardConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "dashboard".to_string(),
            name: "Dashboard".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleDashboard);
        Ok(Self {
            upcoming_deadlines_limit: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUpcomingDeadlinesLimit.to_string())
                .default(default.upcoming_deadlines_limit)
                .interact_text()?,
            upcoming_events_limit: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUpcomingEventsLimit.to_string())
                .default(default.upcoming_events_limit)
                .interact_text()?,
            activity_limit: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptActivityLimit.to_string())
                .default(default.activity_limit)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<ChatConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardConfig>,
}

impl Config {
    /// Reads `config.json`, or returns defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().file_path(CONFIG_FILE_NAME);
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive wizard over the sections the user picks.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ChatConfig::module(),
            QuoteConfig::module(),
            ServerConfig::module(),
            DashboardConfig::module(),
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "chat" => config.chat = Some(ChatConfig::init(&config.chat)?),
                "quote" => config.quote = Some(QuoteConfig::init(&config.quote)?),
                "server" => config.server = Some(ServerConfig::init(&config.server)?),
                "dashboard" => config.dashboard = Some(DashboardConfig::init(&config.dashboard)?),
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn chat_or_default(&self) -> ChatConfig {
        self.chat.clone().unwrap_or_default()
    }

    pub fn quote_or_default(&self) -> QuoteConfig {
        self.quote.clone().unwrap_or_default()
    }

    pub fn server_or_default(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn dashboard_or_default(&self) -> DashboardConfig {
        self.dashboard.clone().unwrap_or_default()
    }

    /// The chat API key from the environment. Empty values count as unset.
    pub fn api_key() -> Option<String> {
        env::var(API_KEY_ENV).ok().filter(|key| !key.trim().is_empty())
    }
}
