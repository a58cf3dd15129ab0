//! Container engine operations over the Docker Engine API.
//!
//! Build and pull are streaming endpoints; progress text is handed to a
//! caller-supplied sink line by line so the command layer owns the output.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use bollard::container::{
    Config, CreateContainerOptions, ListContainersOptions, StartContainerOptions,
};
use bollard::image::{BuildImageOptions, CreateImageOptions, PushImageOptions};
use bollard::models::{HostConfig, PortBinding};
use bollard::Docker;
use bytes::Bytes;
use flate2::write::GzEncoder;
use flate2::Compression;
use futures::StreamExt;

use crate::error::{OpsError, Result};

/// A `HOST:CONTAINER` TCP port publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortMapping {
    pub host: u16,
    pub container: u16,
}

impl FromStr for PortMapping {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            OpsError::InvalidInput(format!(
                "invalid port mapping '{s}', expected HOST:CONTAINER"
            ))
        };
        let (host, container) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            host: host.trim().parse().map_err(|_| invalid())?,
            container: container.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// A `KEY=VALUE` environment assignment for a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvPair {
    pub key: String,
    pub value: String,
}

impl FromStr for EnvPair {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => Err(OpsError::InvalidInput(format!(
                "invalid environment variable '{s}', expected KEY=VALUE"
            ))),
        }
    }
}

impl std::fmt::Display for EnvPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// One row of `list`.
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
    pub state: String,
}

pub struct ContainerEngine {
    docker: Docker,
}

impl ContainerEngine {
    /// Connect through the local socket (or whatever DOCKER_HOST names).
    pub fn connect() -> Result<Self> {
        Ok(Self {
            docker: Docker::connect_with_local_defaults()?,
        })
    }

    /// Build an image from a directory containing a Dockerfile.
    ///
    /// The directory is packed into a gzipped tar and sent as the build
    /// context; daemon output chunks go to `on_output` as they arrive.
    pub async fn build(
        &self,
        context_dir: &Path,
        tag: &str,
        mut on_output: impl FnMut(&str),
    ) -> Result<()> {
        let archive = tar_context(context_dir)?;
        let options = BuildImageOptions {
            dockerfile: "Dockerfile".to_string(),
            t: tag.to_string(),
            rm: true,
            ..Default::default()
        };
        let mut stream =
            self.docker
                .build_image(options, None, Some(bollard::body_full(Bytes::from(archive))));
        while let Some(update) = stream.next().await {
            let info = update?;
            if let Some(error) = info.error {
                return Err(OpsError::Container(error));
            }
            if let Some(chunk) = info.stream {
                on_output(&chunk);
            }
        }
        Ok(())
    }

    /// Create and start a detached container, returning its id.
    pub async fn run(
        &self,
        image: &str,
        name: &str,
        ports: &[PortMapping],
        env: &[EnvPair],
    ) -> Result<String> {
        let mut port_bindings = HashMap::new();
        let mut exposed_ports = HashMap::new();
        for mapping in ports {
            let container_port = format!("{}/tcp", mapping.container);
            port_bindings.insert(
                container_port.clone(),
                Some(vec![PortBinding {
                    host_ip: None,
                    host_port: Some(mapping.host.to_string()),
                }]),
            );
            exposed_ports.insert(container_port, HashMap::new());
        }

        let config = Config {
            image: Some(image.to_string()),
            env: Some(env.iter().map(EnvPair::to_string).collect()),
            exposed_ports: Some(exposed_ports),
            host_config: Some(HostConfig {
                port_bindings: Some(port_bindings),
                ..Default::default()
            }),
            ..Default::default()
        };
        let options = CreateContainerOptions {
            name: name.to_string(),
            platform: None,
        };
        let created = self.docker.create_container(Some(options), config).await?;
        self.docker
            .start_container(name, None::<StartContainerOptions<String>>)
            .await?;
        Ok(created.id)
    }

    /// Containers on the engine; `all` includes stopped ones.
    pub async fn list(&self, all: bool) -> Result<Vec<ContainerSummary>> {
        let options = ListContainersOptions::<String> {
            all,
            ..Default::default()
        };
        let containers = self.docker.list_containers(Some(options)).await?;
        let summaries = containers
            .into_iter()
            .map(|container| {
                let id = container.id.unwrap_or_default();
                let name = container
                    .names
                    .unwrap_or_default()
                    .first()
                    .map(|n| n.trim_start_matches('/').to_string())
                    .unwrap_or_default();
                ContainerSummary {
                    id: short_id(&id),
                    name,
                    state: container
                        .state
                        .or(container.status)
                        .unwrap_or_else(|| "unknown".to_string()),
                }
            })
            .collect();
        Ok(summaries)
    }

    pub async fn stop(&self, name: &str) -> Result<()> {
        self.docker.stop_container(name, None).await?;
        Ok(())
    }

    pub async fn remove(&self, name: &str) -> Result<()> {
        self.docker.remove_container(name, None).await?;
        Ok(())
    }

    /// Pull an image (name may carry a tag), streaming status lines.
    pub async fn pull(&self, image: &str, mut on_output: impl FnMut(&str)) -> Result<()> {
        let options = CreateImageOptions {
            from_image: image.to_string(),
            ..Default::default()
        };
        let mut stream = self.docker.create_image(Some(options), None, None);
        while let Some(update) = stream.next().await {
            let info = update?;
            if let Some(error) = info.error {
                return Err(OpsError::Container(error));
            }
            if let Some(status) = info.status {
                on_output(&status);
            }
        }
        Ok(())
    }

    /// Push an image, streaming status lines. Uses whatever credentials
    /// the daemon already holds.
    pub async fn push(&self, image: &str, mut on_output: impl FnMut(&str)) -> Result<()> {
        let (name, tag) = split_image_tag(image);
        let options = PushImageOptions { tag };
        let mut stream = self.docker.push_image(name, Some(options), None);
        while let Some(update) = stream.next().await {
            let info = update?;
            if let Some(error) = info.error {
                return Err(OpsError::Container(error));
            }
            if let Some(status) = info.status {
                on_output(&status);
            }
        }
        Ok(())
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(12).collect()
}

/// Split `repo/name:tag` into name and tag, defaulting the tag to `latest`.
/// A colon inside a registry host (`registry:5000/img`) is not a tag.
fn split_image_tag(image: &str) -> (&str, &str) {
    match image.rsplit_once(':') {
        Some((name, tag)) if !tag.contains('/') => (name, tag),
        _ => (image, "latest"),
    }
}

fn tar_context(dir: &Path) -> Result<Vec<u8>> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.append_dir_all(".", dir)?;
    let encoder = builder.into_inner()?;
    Ok(encoder.finish()?)
}
