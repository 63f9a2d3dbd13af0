use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::models::Company;
use super::models::CompanyId;
use crate::domain::user::models::UserId;

/// Domain event published when a new company is created.
///
/// Contains snapshot of company data at creation time for downstream consumers.
#[derive(Debug, Clone)]
pub struct CompanyCreatedEvent {
    pub event_id: String,
    pub company: CompanySnapshot,
    pub created_at: DateTime<Utc>,
}

impl CompanyCreatedEvent {
    pub fn new(company: &Company) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            company: CompanySnapshot::from(company),
            created_at: company.created_at,
        }
    }
}

/// Domain event published when a company is updated.
#[derive(Debug, Clone)]
pub struct CompanyUpdatedEvent {
    pub event_id: String,
    pub company: CompanySnapshot,
    pub updated_at: DateTime<Utc>,
}

impl CompanyUpdatedEvent {
    pub fn new(company: &Company) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            company: CompanySnapshot::from(company),
            updated_at: company.updated_at,
        }
    }
}

/// Domain event published when a company is deleted by its owner.
#[derive(Debug, Clone)]
pub struct CompanyDeletedEvent {
    pub event_id: String,
    pub company_id: String,
    pub deleted_by: String,
    pub deleted_at: DateTime<Utc>,
}

impl CompanyDeletedEvent {
    pub fn new(company_id: &CompanyId, deleted_by: &UserId) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            company_id: company_id.to_string(),
            deleted_by: deleted_by.to_string(),
            deleted_at: Utc::now(),
        }
    }
}

/// Flat copy of a company's fields carried by created/updated events.
#[derive(Debug, Clone)]
pub struct CompanySnapshot {
    pub company_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub employees_amount: i32,
    pub registered: bool,
    pub company_type: String,
}

impl From<&Company> for CompanySnapshot {
    fn from(company: &Company) -> Self {
        Self {
            company_id: company.id.to_string(),
            owner_id: company.owner_id.to_string(),
            name: company.name.as_str().to_string(),
            description: company.description.as_str().to_string(),
            employees_amount: company.employees_amount.value(),
            registered: company.registered,
            company_type: company.company_type.as_str().to_string(),
        }
    }
}
