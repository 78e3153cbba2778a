use crate::{
    api::quote::Quotes,
    libs::{config::Config, messages::Message},
    msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let quote = Quotes::new(&config.quote_or_default())?.fetch().await;

    msg_print!(Message::QuoteOfTheDay, true);
    msg_print!(quote);
    Ok(())
}
