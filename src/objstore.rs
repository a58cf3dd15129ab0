//! Object storage transfers over S3.
//!
//! Thin wrapper around the AWS SDK client. SDK errors carry their useful
//! detail (service error code, message) in the source chain, so failures
//! are flattened through `DisplayErrorContext` before they surface.

use std::path::Path;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::config::AwsConfig;
use crate::error::{OpsError, Result};

/// One listed object.
pub struct ObjectSummary {
    pub key: String,
    pub size: i64,
}

pub struct ObjStore {
    client: Client,
}

impl ObjStore {
    pub async fn connect(aws: &AwsConfig) -> Self {
        let shared = aws.load().await;
        Self {
            client: Client::new(&shared),
        }
    }

    /// Objects in a bucket, in the order the service returns them.
    pub async fn list(&self, bucket: &str) -> Result<Vec<ObjectSummary>> {
        let response = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .send()
            .await
            .map_err(store_err)?;
        let objects = response
            .contents()
            .iter()
            .map(|object| ObjectSummary {
                key: object.key().unwrap_or_default().to_string(),
                size: object.size().unwrap_or(0),
            })
            .collect();
        Ok(objects)
    }

    /// Upload a local file, returning the object name used.
    ///
    /// When no explicit name is given the file's basename is taken.
    pub async fn upload(&self, bucket: &str, file: &Path, object: Option<&str>) -> Result<String> {
        let object_name = match object {
            Some(name) => name.to_string(),
            None => derive_object_name(file)?,
        };
        let body = ByteStream::from_path(file)
            .await
            .map_err(|err| OpsError::ObjectStore(err.to_string()))?;
        self.client
            .put_object()
            .bucket(bucket)
            .key(&object_name)
            .body(body)
            .send()
            .await
            .map_err(store_err)?;
        Ok(object_name)
    }

    /// Download an object to a local path, returning the byte count written.
    pub async fn download(&self, bucket: &str, object: &str, output: &Path) -> Result<u64> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(object)
            .send()
            .await
            .map_err(store_err)?;
        let data = response
            .body
            .collect()
            .await
            .map_err(|err| OpsError::ObjectStore(err.to_string()))?;
        let bytes = data.into_bytes();
        std::fs::write(output, &bytes)?;
        Ok(bytes.len() as u64)
    }

    pub async fn delete(&self, bucket: &str, object: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(object)
            .send()
            .await
            .map_err(store_err)?;
        Ok(())
    }
}

fn store_err<E>(err: E) -> OpsError
where
    E: std::error::Error + Send + Sync + 'static,
{
    OpsError::ObjectStore(DisplayErrorContext(err).to_string())
}

fn derive_object_name(file: &Path) -> Result<String> {
    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            OpsError::InvalidInput(format!(
                "cannot derive an object name from '{}'",
                file.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_name_defaults_to_basename() {
        let name = derive_object_name(Path::new("/tmp/reports/summary.csv")).unwrap();
        assert_eq!(name, "summary.csv");
    }

    #[test]
    fn pathological_paths_are_rejected() {
        assert!(derive_object_name(Path::new("/")).is_err());
        assert!(derive_object_name(Path::new("..")).is_err());
    }
}
