//! Message broker commands.

use anyhow::Result;
use console::style;

use crate::broker::{Broker, OffsetReset};
use crate::config::OpsConfig;

#[derive(Debug, Clone)]
pub enum QueueSubcommand {
    /// Publish one message to a topic.
    Produce { topic: String, message: String },
    /// Poll a topic for a bounded time and print what arrived.
    Consume {
        topic: String,
        group_id: String,
        auto_offset_reset: OffsetReset,
        max: usize,
    },
    /// List topics known to the cluster.
    Topics,
    /// Create a topic.
    CreateTopic {
        name: String,
        partitions: i32,
        replication_factor: i32,
    },
    /// Delete a topic.
    DeleteTopic { name: String },
}

pub async fn execute_queue(config: &OpsConfig, command: QueueSubcommand) -> Result<()> {
    let broker = Broker::new(config.broker.servers.as_str());

    match command {
        QueueSubcommand::Produce { topic, message } => {
            broker.publish(&topic, &message)?;
            println!(
                "{} Message sent to topic '{}'.",
                style("✓").green(),
                topic
            );
        }

        QueueSubcommand::Consume {
            topic,
            group_id,
            auto_offset_reset,
            max,
        } => {
            for payload in broker.consume(&topic, &group_id, auto_offset_reset, max)? {
                println!("{payload}");
            }
        }

        QueueSubcommand::Topics => {
            for topic in broker.topics()? {
                println!("{topic}");
            }
        }

        QueueSubcommand::CreateTopic {
            name,
            partitions,
            replication_factor,
        } => {
            broker
                .create_topic(&name, partitions, replication_factor)
                .await?;
            println!(
                "{} Topic '{}' created successfully.",
                style("✓").green(),
                name
            );
        }

        QueueSubcommand::DeleteTopic { name } => {
            broker.delete_topic(&name).await?;
            println!(
                "{} Topic '{}' deleted successfully.",
                style("✓").green(),
                name
            );
        }
    }

    Ok(())
}
