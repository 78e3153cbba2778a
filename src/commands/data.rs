use crate::{
    libs::{
        context::DataContext,
        entity::Collection,
        messages::Message,
        transfer::{export, read_import},
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DataArgs {
    #[command(subcommand)]
    command: DataCommand,
}

#[derive(Debug, Subcommand)]
enum DataCommand {
    /// Write all tasks, goals and events to a JSON file
    Export { file: PathBuf },
    /// Replace all data with the contents of a JSON file
    Import {
        file: PathBuf,
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: DataArgs) -> Result<()> {
    let mut ctx = DataContext::open_default()?;

    match args.command {
        DataCommand::Export { file } => {
            let data = ctx.snapshot();
            export(data, &file)?;
            msg_success!(Message::DataExported(
                file.display().to_string(),
                data.len(Collection::Tasks),
                data.len(Collection::Goals),
                data.len(Collection::Events),
            ));
        }
        DataCommand::Import { file, yes } => {
            let import = read_import(&file)?;
            for collection in &import.missing {
                msg_warning!(Message::ImportCollectionMissing(collection.name().to_string()));
            }
            for (collection, id) in &import.duplicates {
                msg_warning!(Message::ImportDuplicateId(collection.name().to_string(), id.clone()));
            }

            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmImportReplace.to_string())
                    .default(false)
                    .interact()?;
            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            let counts = (
                import.data.len(Collection::Tasks),
                import.data.len(Collection::Goals),
                import.data.len(Collection::Events),
            );
            ctx.replace_all(import.data);
            msg_success!(Message::DataImported(counts.0, counts.1, counts.2));
        }
    }

    Ok(())
}
