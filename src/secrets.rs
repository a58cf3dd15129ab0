//! Secret storage over AWS Secrets Manager.

use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;

use crate::config::AwsConfig;
use crate::error::{OpsError, Result};

pub struct SecretStore {
    client: Client,
}

impl SecretStore {
    pub async fn connect(aws: &AwsConfig) -> Self {
        let shared = aws.load().await;
        Self {
            client: Client::new(&shared),
        }
    }

    pub async fn store(&self, name: &str, value: &str) -> Result<()> {
        self.client
            .create_secret()
            .name(name)
            .secret_string(value)
            .send()
            .await
            .map_err(secret_err)?;
        Ok(())
    }

    /// Fetch a secret's string value. Binary-only secrets are rejected.
    pub async fn get(&self, name: &str) -> Result<String> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(secret_err)?;
        response
            .secret_string()
            .map(str::to_string)
            .ok_or_else(|| {
                OpsError::SecretStore(format!("secret '{name}' has no string value"))
            })
    }

    /// Names of every secret in the account, in service order.
    pub async fn list(&self) -> Result<Vec<String>> {
        let response = self.client.list_secrets().send().await.map_err(secret_err)?;
        let names = response
            .secret_list()
            .iter()
            .filter_map(|entry| entry.name().map(str::to_string))
            .collect();
        Ok(names)
    }

    /// Delete immediately, skipping the recovery window.
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.client
            .delete_secret()
            .secret_id(name)
            .force_delete_without_recovery(true)
            .send()
            .await
            .map_err(secret_err)?;
        Ok(())
    }
}

fn secret_err<E>(err: E) -> OpsError
where
    E: std::error::Error + Send + Sync + 'static,
{
    OpsError::SecretStore(DisplayErrorContext(err).to_string())
}
