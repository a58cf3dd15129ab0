//! Object storage commands.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::OpsConfig;
use crate::objstore::ObjStore;

#[derive(Debug, Clone)]
pub enum StoreSubcommand {
    /// List the objects in a bucket.
    List { bucket: String },
    /// Upload a local file.
    Upload {
        bucket: String,
        file: PathBuf,
        object: Option<String>,
    },
    /// Download an object to a local path.
    Download {
        bucket: String,
        object: String,
        output: PathBuf,
    },
    /// Delete an object.
    Delete { bucket: String, object: String },
}

pub async fn execute_store(config: &OpsConfig, command: StoreSubcommand) -> Result<()> {
    let store = ObjStore::connect(&config.aws).await;

    match command {
        StoreSubcommand::List { bucket } => {
            let objects = store.list(&bucket).await?;
            if objects.is_empty() {
                println!("No objects found in bucket {bucket}.");
            } else {
                for object in objects {
                    println!("{} ({} bytes)", object.key, object.size);
                }
            }
        }

        StoreSubcommand::Upload {
            bucket,
            file,
            object,
        } => {
            let object_name = store.upload(&bucket, &file, object.as_deref()).await?;
            println!(
                "{} File {} uploaded to {}/{}.",
                style("✓").green(),
                file.display(),
                bucket,
                object_name
            );
        }

        StoreSubcommand::Download {
            bucket,
            object,
            output,
        } => {
            store.download(&bucket, &object, &output).await?;
            println!(
                "{} File {} downloaded from {} to {}.",
                style("✓").green(),
                object,
                bucket,
                output.display()
            );
        }

        StoreSubcommand::Delete { bucket, object } => {
            store.delete(&bucket, &object).await?;
            println!(
                "{} Object {} deleted from bucket {}.",
                style("✓").green(),
                object,
                bucket
            );
        }
    }

    Ok(())
}
