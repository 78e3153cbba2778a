//! Random motivational quote client.
//!
//! Quote fetching never fails: the dashboard always has something to show.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://zenquotes.io/api/random";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QuoteConfig {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        QuoteConfig {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl QuoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "quote".to_string(),
            name: "Daily quote".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleQuote);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptQuoteApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRequestTimeout.to_string())
                .default(config.timeout_secs)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    /// Returned when the quote API answers with a non-success status.
    pub fn unavailable() -> Self {
        Quote {
            text: "Fallback quote".to_string(),
            author: "Unknown".to_string(),
        }
    }

    /// Returned when the quote API cannot be reached or read.
    pub fn offline() -> Self {
        Quote {
            text: "Stay focused and never give up.".to_string(),
            author: "Leo".to_string(),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}

/// Upstream shape: `[{ "q": text, "a": author }]`.
#[derive(Deserialize, Debug)]
struct ZenQuote {
    q: String,
    a: String,
}

#[derive(Debug, Clone)]
pub struct Quotes {
    client: Client,
    config: QuoteConfig,
}

impl Quotes {
    pub fn new(config: &QuoteConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &QuoteConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    pub async fn fetch(&self) -> Quote {
        let res = match self.client.get(&self.config.api_url).send().await {
            Ok(res) => res,
            Err(e) => {
                tracing::warn!(error = %e, "quote request failed");
                return Quote::offline();
            }
        };

        if !res.status().is_success() {
            tracing::debug!(status = %res.status(), "quote API returned an error status");
            return Quote::unavailable();
        }

        match res.json::<Vec<ZenQuote>>().await {
            Ok(quotes) => quotes
                .into_iter()
                .next()
                .map(|quote| Quote { text: quote.q, author: quote.a })
                .unwrap_or_else(Quote::offline),
            Err(e) => {
                tracing::warn!(error = %e, "quote response could not be read");
                Quote::offline()
            }
        }
    }
}
