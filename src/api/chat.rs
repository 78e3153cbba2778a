//! Client for an OpenAI-compatible chat completion API.
//!
//! Each call is a single turn: the configured system prompt plus the user's
//! message, no history.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are StudyMate AI. Help students stay focused, motivated, and organized.";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Reply used when the upstream answers without any message content.
pub const NO_REPLY: &str = "No valid response from AI.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Missing GROQ API key")]
    MissingApiKey,

    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("chat API responded with {0}")]
    Status(StatusCode),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatConfig {
    pub api_url: String,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ChatConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "chat".to_string(),
            name: "Study assistant chat".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleChat);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptChatApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptChatModel.to_string())
                .default(config.model)
                .interact_text()?,
            system_prompt: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptChatSystemPrompt.to_string())
                .default(config.system_prompt)
                .interact_text()?,
            temperature: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptChatTemperature.to_string())
                .default(config.temperature)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRequestTimeout.to_string())
                .default(config.timeout_secs)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize, Debug, Default)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Chat {
    client: Client,
    config: ChatConfig,
    api_key: Option<String>,
}

impl Chat {
    pub fn new(config: &ChatConfig, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self::with_client(client, config, api_key))
    }

    /// Builds a client sharing an existing connection pool.
    pub fn with_client(client: Client, config: &ChatConfig, api_key: Option<String>) -> Self {
        Self {
            client,
            config: config.clone(),
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one user message and returns the assistant's reply text.
    pub async fn reply(&self, message: &str) -> Result<String, ChatError> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingApiKey)?;

        let body = CompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            temperature: self.config.temperature,
        };

        let res = self.client.post(&self.config.api_url).bearer_auth(api_key).json(&body).send().await?;
        if !res.status().is_success() {
            tracing::warn!(status = %res.status(), "chat API rejected the request");
            return Err(ChatError::Status(res.status()));
        }

        let completion = res.json::<CompletionResponse>().await?;
        let reply = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| NO_REPLY.to_string());

        Ok(reply)
    }
}
