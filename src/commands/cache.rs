//! Key-value cache commands.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::config::OpsConfig;
use crate::kv::KvStore;

#[derive(Debug, Clone)]
pub enum CacheSubcommand {
    /// Set a key.
    Set { key: String, value: String },
    /// Print a key's value.
    Get { key: String },
    /// Delete a key.
    Delete { key: String },
    /// List keys matching a glob pattern.
    Keys { pattern: String },
    /// Drop every key in the current database.
    Flush { yes: bool },
    /// Print server information.
    Info,
}

pub fn execute_cache(config: &OpsConfig, command: CacheSubcommand) -> Result<()> {
    let mut store = KvStore::connect(&config.cache.url)?;

    match command {
        CacheSubcommand::Set { key, value } => {
            store.set(&key, &value)?;
            println!("{} Key '{}' set successfully.", style("✓").green(), key);
        }

        CacheSubcommand::Get { key } => match store.get(&key)? {
            Some(value) => println!("{value}"),
            None => println!("Key not found."),
        },

        CacheSubcommand::Delete { key } => {
            if store.delete(&key)? {
                println!("{} Key '{}' deleted successfully.", style("✓").green(), key);
            } else {
                println!("Key '{key}' not found.");
            }
        }

        CacheSubcommand::Keys { pattern } => {
            for key in store.keys(&pattern)? {
                println!("{key}");
            }
        }

        CacheSubcommand::Flush { yes } => {
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt("Flush every key in the current database?")
                    .default(false)
                    .interact()?;
            if !confirmed {
                println!("Flush cancelled.");
                return Ok(());
            }
            store.flush()?;
            println!("{} Database flushed successfully.", style("✓").green());
        }

        CacheSubcommand::Info => {
            println!("{}", store.info()?);
        }
    }

    Ok(())
}
