use crate::{
    db::{
        collections::{CollectionStore, Collections},
        db::Db,
        migrations::{needs_migration, report_status, MigrationManager},
        payload::stored_version,
    },
    libs::{entity::Collection, messages::Message},
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Schema version and stored payload versions
    Status,
    /// Applied schema migrations
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    match args.command {
        MigrationsCommand::Status => {
            let conn = Db::new_without_migrations()?;
            report_status(&conn)?;
            if needs_migration(&conn)? {
                return Ok(());
            }

            let store = Collections::new()?;
            for key in store.keys()? {
                let Some(collection) = Collection::ALL.into_iter().find(|c| c.key() == key) else {
                    continue;
                };
                let Some(raw) = store.load(&key)? else {
                    continue;
                };
                match stored_version(collection, &raw) {
                    Ok(version) => msg_print!(format!("  {}: {}", collection, Message::PayloadVersion(version))),
                    Err(e) => msg_warning!(Message::StoreLoadFailed(collection.name().to_string(), e.to_string())),
                }
            }
        }
        MigrationsCommand::History => {
            let conn = Db::new_without_migrations()?;
            let manager = MigrationManager::new();
            let history = manager.get_migration_history(&conn)?;

            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in history {
                println!("  v{}: {} (applied: {})", version, name, applied_at);
            }
        }
    }

    Ok(())
}
