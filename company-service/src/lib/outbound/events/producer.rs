use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::FutureProducer;
use rdkafka::producer::FutureRecord;
use rdkafka::util::Timeout;

use crate::config::KafkaConfig;
use crate::domain::company::events::CompanyCreatedEvent;
use crate::domain::company::events::CompanyDeletedEvent;
use crate::domain::company::events::CompanyUpdatedEvent;
use crate::domain::company::ports::EventPublisher;
use crate::domain::errors::EventPublisherError;
use crate::outbound::events::messages::CompanyEventMessage;

/// Publishes company events to a single Kafka topic.
pub struct KafkaEventProducer {
    producer: FutureProducer,
    topic: String,
    timeout: Duration,
}

impl KafkaEventProducer {
    /// Create a producer with at-least-once delivery settings.
    ///
    /// # Notes:
    /// - `acks=all`: Wait for all in-sync replicas to acknowledge
    /// - `enable.idempotence=true`: Broker drops duplicates caused by retries
    /// - `max.in.flight.requests.per.connection=5`: Pipelining without reordering
    pub fn new(config: &KafkaConfig) -> Result<Self, anyhow::Error> {
        tracing::info!(
            brokers = %config.brokers,
            topic = %config.topic,
            "Initializing Kafka producer for company events"
        );

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", "30000")
            .set("compression.type", "gzip")
            .set("enable.idempotence", "true")
            .set("acks", "all")
            .set("retries", "10")
            .set("max.in.flight.requests.per.connection", "5")
            .set("retry.backoff.ms", "100")
            .create()?;

        Ok(Self {
            producer,
            topic: config.topic.clone(),
            timeout: Duration::from_secs(30),
        })
    }

    async fn publish(&self, message: CompanyEventMessage) -> Result<(), EventPublisherError> {
        let payload = serde_json::to_string(&message)
            .map_err(|e| EventPublisherError::SerializationFailed(e.to_string()))?;
        let key = message.company_id();

        let record = FutureRecord::to(&self.topic).key(key).payload(&payload);

        self.producer
            .send(record, Timeout::After(self.timeout))
            .await
            .map(|(partition, offset)| {
                tracing::debug!(
                    topic = %self.topic,
                    company_id = %key,
                    partition,
                    offset,
                    "Company event published"
                );
            })
            .map_err(|(err, _)| EventPublisherError::PublishFailed(err.to_string()))
    }
}

#[async_trait]
impl EventPublisher for KafkaEventProducer {
    async fn publish_company_created(
        &self,
        event: &CompanyCreatedEvent,
    ) -> Result<(), EventPublisherError> {
        self.publish(event.into()).await
    }

    async fn publish_company_updated(
        &self,
        event: &CompanyUpdatedEvent,
    ) -> Result<(), EventPublisherError> {
        self.publish(event.into()).await
    }

    async fn publish_company_deleted(
        &self,
        event: &CompanyDeletedEvent,
    ) -> Result<(), EventPublisherError> {
        self.publish(event.into()).await
    }
}
