use crate::{
    api::chat::{Chat, ChatError},
    libs::{
        config::{Config, API_KEY_ENV},
        messages::Message,
    },
    msg_error, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ChatArgs {
    /// Message for the study assistant
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,
}

pub async fn cmd(args: ChatArgs) -> Result<()> {
    let config = Config::read()?;
    let chat = Chat::new(&config.chat_or_default(), Config::api_key())?;

    match chat.reply(&args.message.join(" ")).await {
        Ok(reply) => msg_print!(reply),
        Err(ChatError::MissingApiKey) => msg_error!(Message::ChatMissingApiKey(API_KEY_ENV.to_string())),
        Err(e) => msg_error!(Message::ChatFailed(e.to_string())),
    }

    Ok(())
}
