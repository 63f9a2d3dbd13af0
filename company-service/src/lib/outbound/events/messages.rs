use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::company::events::CompanyCreatedEvent;
use crate::domain::company::events::CompanyDeletedEvent;
use crate::domain::company::events::CompanySnapshot;
use crate::domain::company::events::CompanyUpdatedEvent;

/// Wire envelope for company events, tagged with `event_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum CompanyEventMessage {
    CompanyCreated(CompanyChangedMessage),
    CompanyUpdated(CompanyChangedMessage),
    CompanyDeleted(CompanyDeletedMessage),
}

impl CompanyEventMessage {
    /// Partition key. Every event for one company lands on the same partition.
    pub fn company_id(&self) -> &str {
        match self {
            CompanyEventMessage::CompanyCreated(m) | CompanyEventMessage::CompanyUpdated(m) => {
                &m.company.company_id
            }
            CompanyEventMessage::CompanyDeleted(m) => &m.company_id,
        }
    }
}

/// Body of created/updated messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyChangedMessage {
    pub event_id: String,
    #[serde(flatten)]
    pub company: CompanyMessage,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyMessage {
    pub company_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub employees_amount: i32,
    pub registered: bool,
    #[serde(rename = "type")]
    pub company_type: String,
}

impl From<&CompanySnapshot> for CompanyMessage {
    fn from(snapshot: &CompanySnapshot) -> Self {
        Self {
            company_id: snapshot.company_id.clone(),
            owner_id: snapshot.owner_id.clone(),
            name: snapshot.name.clone(),
            description: snapshot.description.clone(),
            employees_amount: snapshot.employees_amount,
            registered: snapshot.registered,
            company_type: snapshot.company_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDeletedMessage {
    pub event_id: String,
    pub company_id: String,
    pub deleted_by: String,
    pub occurred_at: DateTime<Utc>,
}

impl From<&CompanyCreatedEvent> for CompanyEventMessage {
    fn from(event: &CompanyCreatedEvent) -> Self {
        CompanyEventMessage::CompanyCreated(CompanyChangedMessage {
            event_id: event.event_id.clone(),
            company: (&event.company).into(),
            occurred_at: event.created_at,
        })
    }
}

impl From<&CompanyUpdatedEvent> for CompanyEventMessage {
    fn from(event: &CompanyUpdatedEvent) -> Self {
        CompanyEventMessage::CompanyUpdated(CompanyChangedMessage {
            event_id: event.event_id.clone(),
            company: (&event.company).into(),
            occurred_at: event.updated_at,
        })
    }
}

impl From<&CompanyDeletedEvent> for CompanyEventMessage {
    fn from(event: &CompanyDeletedEvent) -> Self {
        CompanyEventMessage::CompanyDeleted(CompanyDeletedMessage {
            event_id: event.event_id.clone(),
            company_id: event.company_id.clone(),
            deleted_by: event.deleted_by.clone(),
            occurred_at: event.deleted_at,
        })
    }
}
