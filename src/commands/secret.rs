//! Secrets manager commands.

use anyhow::Result;
use console::style;

use crate::config::{AwsConfig, OpsConfig};
use crate::secrets::SecretStore;

#[derive(Debug, Clone)]
pub enum SecretSubcommand {
    /// Store a new secret.
    Store {
        name: String,
        value: String,
        region: Option<String>,
    },
    /// Print a secret's value.
    Get {
        name: String,
        region: Option<String>,
    },
    /// List secret names.
    List { region: Option<String> },
    /// Delete a secret without a recovery window.
    Delete {
        name: String,
        region: Option<String>,
    },
}

impl SecretSubcommand {
    fn region(&self) -> Option<&str> {
        match self {
            SecretSubcommand::Store { region, .. }
            | SecretSubcommand::Get { region, .. }
            | SecretSubcommand::List { region }
            | SecretSubcommand::Delete { region, .. } => region.as_deref(),
        }
    }
}

pub async fn execute_secret(config: &OpsConfig, command: SecretSubcommand) -> Result<()> {
    // A --region flag wins over the configured region.
    let aws = AwsConfig {
        region: command
            .region()
            .map(str::to_string)
            .or_else(|| config.aws.region.clone()),
        endpoint_url: config.aws.endpoint_url.clone(),
    };
    let store = SecretStore::connect(&aws).await;

    match command {
        SecretSubcommand::Store { name, value, .. } => {
            store.store(&name, &value).await?;
            println!("{} Secret {} stored successfully.", style("✓").green(), name);
        }

        SecretSubcommand::Get { name, .. } => {
            let secret = store.get(&name).await?;
            println!("Secret value: {secret}");
        }

        SecretSubcommand::List { .. } => {
            for name in store.list().await? {
                println!("Name: {name}");
            }
        }

        SecretSubcommand::Delete { name, .. } => {
            store.delete(&name).await?;
            println!("{} Secret {} deleted successfully.", style("✓").green(), name);
        }
    }

    Ok(())
}
