//! Message broker plumbing over Kafka.
//!
//! Each operation builds its own client against the configured bootstrap
//! servers. Publishing and consuming stay synchronous on the base clients;
//! topic administration goes through the admin client's async API.

use std::time::Duration;

use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{BaseConsumer, Consumer};
use rdkafka::error::KafkaError;
use rdkafka::producer::{BaseProducer, BaseRecord, Producer};
use rdkafka::Message;

use crate::error::{OpsError, Result};

const METADATA_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Where a fresh consumer group starts reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetReset {
    Earliest,
    Latest,
}

impl OffsetReset {
    fn as_str(self) -> &'static str {
        match self {
            OffsetReset::Earliest => "earliest",
            OffsetReset::Latest => "latest",
        }
    }
}

pub struct Broker {
    servers: String,
}

impl Broker {
    pub fn new(servers: impl Into<String>) -> Self {
        Self {
            servers: servers.into(),
        }
    }

    fn base_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config.set("bootstrap.servers", &self.servers);
        config
    }

    /// Send one message and wait for the broker to acknowledge it.
    pub fn publish(&self, topic: &str, message: &str) -> Result<()> {
        let producer: BaseProducer = self.base_config().create()?;
        producer
            .send(BaseRecord::<(), str>::to(topic).payload(message))
            .map_err(|(err, _)| OpsError::from(err))?;
        producer.flush(METADATA_TIMEOUT)?;
        Ok(())
    }

    /// Poll a topic a bounded number of times and collect the payloads seen.
    ///
    /// Each poll waits up to a second, so an idle topic returns after
    /// roughly `polls` seconds with whatever arrived in the meantime.
    pub fn consume(
        &self,
        topic: &str,
        group: &str,
        offset_reset: OffsetReset,
        polls: usize,
    ) -> Result<Vec<String>> {
        let mut config = self.base_config();
        config.set("group.id", group);
        config.set("auto.offset.reset", offset_reset.as_str());
        let consumer: BaseConsumer = config.create()?;
        consumer.subscribe(&[topic])?;

        let mut payloads = Vec::new();
        for _ in 0..polls {
            match consumer.poll(POLL_INTERVAL) {
                None => continue,
                // End-of-partition is a position marker, not a failure.
                Some(Err(KafkaError::PartitionEOF(_))) => continue,
                Some(Err(err)) => return Err(err.into()),
                Some(Ok(message)) => {
                    let text = message
                        .payload()
                        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                        .unwrap_or_default();
                    payloads.push(text);
                }
            }
        }
        Ok(payloads)
    }

    /// Topic names known to the cluster, sorted.
    pub fn topics(&self) -> Result<Vec<String>> {
        let consumer: BaseConsumer = self.base_config().create()?;
        let metadata = consumer.fetch_metadata(None, METADATA_TIMEOUT)?;
        let mut names: Vec<String> = metadata
            .topics()
            .iter()
            .map(|topic| topic.name().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    pub async fn create_topic(&self, name: &str, partitions: i32, replication: i32) -> Result<()> {
        let admin: AdminClient<DefaultClientContext> = self.base_config().create()?;
        let topic = NewTopic::new(name, partitions, TopicReplication::Fixed(replication));
        let results = admin.create_topics(&[topic], &AdminOptions::new()).await?;
        for result in results {
            result.map_err(|(topic, code)| {
                OpsError::Broker(format!("creating topic '{topic}': {code}"))
            })?;
        }
        Ok(())
    }

    pub async fn delete_topic(&self, name: &str) -> Result<()> {
        let admin: AdminClient<DefaultClientContext> = self.base_config().create()?;
        let results = admin.delete_topics(&[name], &AdminOptions::new()).await?;
        for result in results {
            result.map_err(|(topic, code)| {
                OpsError::Broker(format!("deleting topic '{topic}': {code}"))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_reset_maps_to_config_values() {
        assert_eq!(OffsetReset::Earliest.as_str(), "earliest");
        assert_eq!(OffsetReset::Latest.as_str(), "latest");
    }

    #[test]
    fn base_config_carries_bootstrap_servers() {
        let broker = Broker::new("broker-1:9092,broker-2:9092");
        let config = broker.base_config();
        assert_eq!(
            config.get("bootstrap.servers"),
            Some("broker-1:9092,broker-2:9092")
        );
    }
}
