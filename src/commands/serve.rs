use crate::{
    api::server::{start_server, AppState},
    libs::{
        config::{Config, API_KEY_ENV},
        messages::Message,
    },
    msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind, overrides the configured host
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on, overrides the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = Config::read()?;
    let server = config.server_or_default();
    let state = AppState::from_config(&config, Config::api_key())?;
    if !state.chat.has_api_key() {
        msg_warning!(Message::ChatMissingApiKey(API_KEY_ENV.to_string()));
    }

    let host = args.host.unwrap_or(server.host);
    let port = args.port.unwrap_or(server.port);
    start_server(state, &host, port).await
}
