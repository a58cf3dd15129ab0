//! Container engine commands.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::container::{ContainerEngine, EnvPair, PortMapping};

#[derive(Debug, Clone)]
pub enum DockerSubcommand {
    /// Build an image from a context directory.
    Build { path: PathBuf, tag: String },
    /// Create and start a detached container.
    Run {
        image: String,
        name: String,
        ports: Vec<PortMapping>,
        env: Vec<EnvPair>,
    },
    /// List containers.
    List { all: bool },
    /// Stop a running container.
    Stop { name: String },
    /// Remove a container.
    Remove { name: String },
    /// Pull an image from a registry.
    Pull { image: String },
    /// Push an image to a registry.
    Push { image: String },
}

pub async fn execute_docker(command: DockerSubcommand) -> Result<()> {
    let engine = ContainerEngine::connect()?;

    match command {
        DockerSubcommand::Build { path, tag } => {
            engine.build(&path, &tag, |chunk| print!("{chunk}")).await?;
            println!("{} Image {} built successfully.", style("✓").green(), tag);
        }

        DockerSubcommand::Run {
            image,
            name,
            ports,
            env,
        } => {
            let id = engine.run(&image, &name, &ports, &env).await?;
            tracing::debug!(container = %id, "container created");
            println!(
                "{} Container {} started from image {}.",
                style("✓").green(),
                name,
                image
            );
        }

        DockerSubcommand::List { all } => {
            for container in engine.list(all).await? {
                println!("{} - {} - {}", container.id, container.name, container.state);
            }
        }

        DockerSubcommand::Stop { name } => {
            engine.stop(&name).await?;
            println!("{} Container {} stopped.", style("✓").green(), name);
        }

        DockerSubcommand::Remove { name } => {
            engine.remove(&name).await?;
            println!("{} Container {} removed.", style("✓").green(), name);
        }

        DockerSubcommand::Pull { image } => {
            engine.pull(&image, |status| println!("{status}")).await?;
            println!(
                "{} Image {} pulled successfully.",
                style("✓").green(),
                image
            );
        }

        DockerSubcommand::Push { image } => {
            engine.push(&image, |status| println!("{status}")).await?;
            println!(
                "{} Image {} pushed successfully.",
                style("✓").green(),
                image
            );
        }
    }

    Ok(())
}
