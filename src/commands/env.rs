//! Environment file commands.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::OpsConfig;
use crate::envfile::EnvFile;

#[derive(Debug, Clone)]
pub enum EnvSubcommand {
    /// Load a file into the process environment.
    Load { file: Option<PathBuf> },
    /// Set a variable and persist it to the env file.
    Set { key: String, value: String },
    /// Print a variable.
    Get { key: String },
    /// Remove a variable from the environment and the file.
    Unset { key: String },
    /// Print every variable, sorted.
    List,
}

pub fn execute_env(config: &OpsConfig, command: EnvSubcommand) -> Result<()> {
    match command {
        EnvSubcommand::Load { file } => {
            let path = file.unwrap_or_else(|| config.env.file.clone());
            let env_file = EnvFile::new(&path);
            let count = env_file.load()?;
            tracing::debug!(count, "environment entries applied");
            println!(
                "{} Environment variables loaded from {}.",
                style("✓").green(),
                path.display()
            );
        }

        EnvSubcommand::Set { key, value } => {
            let env_file = EnvFile::new(&config.env.file);
            env_file.set(&key, &value)?;
            println!(
                "{} Environment variable {} set to {}.",
                style("✓").green(),
                key,
                value
            );
        }

        EnvSubcommand::Get { key } => {
            let env_file = EnvFile::new(&config.env.file);
            match env_file.get(&key) {
                Some(value) => println!("{key}={value}"),
                None => println!("Environment variable {key} not found."),
            }
        }

        EnvSubcommand::Unset { key } => {
            let env_file = EnvFile::new(&config.env.file);
            env_file.unset(&key)?;
            println!(
                "{} Environment variable {} removed.",
                style("✓").green(),
                key
            );
        }

        EnvSubcommand::List => {
            let env_file = EnvFile::new(&config.env.file);
            for (key, value) in env_file.vars()? {
                println!("{key}: {value}");
            }
        }
    }

    Ok(())
}
