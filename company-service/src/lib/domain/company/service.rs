use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::CompanyError;
use super::events::CompanyCreatedEvent;
use super::events::CompanyDeletedEvent;
use super::events::CompanyUpdatedEvent;
use super::models::Company;
use super::models::CompanyId;
use super::models::CreateCompanyCommand;
use super::models::UpdateCompanyCommand;
use super::ports::CompanyRepository;
use super::ports::CompanyServicePort;
use super::ports::EventPublisher;
use crate::domain::user::models::UserId;

/// Concrete implementation of CompanyServicePort.
///
/// Deletion is identity-scoped: the company is looked up by ID and owner
/// together before anything is removed.
pub struct CompanyService<CR, EP>
where
    CR: CompanyRepository,
    EP: EventPublisher,
{
    repository: Arc<CR>,
    event_publisher: Arc<EP>,
}

impl<CR, EP> CompanyService<CR, EP>
where
    CR: CompanyRepository,
    EP: EventPublisher,
{
    pub fn new(repository: Arc<CR>, event_publisher: Arc<EP>) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }
}

#[async_trait]
impl<CR, EP> CompanyServicePort for CompanyService<CR, EP>
where
    CR: CompanyRepository,
    EP: EventPublisher,
{
    async fn get_company(&self, id: CompanyId) -> Result<Company, CompanyError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CompanyError::NotFound(id))
    }

    async fn create_company(
        &self,
        command: CreateCompanyCommand,
        owner_id: UserId,
    ) -> Result<Company, CompanyError> {
        let now = Utc::now();
        let company = Company {
            id: CompanyId::new(),
            name: command.name,
            description: command.description,
            employees_amount: command.employees_amount,
            registered: command.registered,
            company_type: command.company_type,
            owner_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(company).await?;
        tracing::info!(company_id = %created.id, owner_id = %owner_id, "Company created");

        let event = CompanyCreatedEvent::new(&created);
        if let Err(e) = self.event_publisher.publish_company_created(&event).await {
            tracing::error!(
                "Failed to publish CompanyCreated event for company {}: {}",
                created.id,
                e
            );
        }

        Ok(created)
    }

    async fn update_company(
        &self,
        id: CompanyId,
        command: UpdateCompanyCommand,
    ) -> Result<Company, CompanyError> {
        let mut company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CompanyError::NotFound(id))?;

        command.apply_to(&mut company);
        company.updated_at = Utc::now();

        let updated = self.repository.update(company).await?;
        tracing::info!(company_id = %updated.id, "Company updated");

        let event = CompanyUpdatedEvent::new(&updated);
        if let Err(e) = self.event_publisher.publish_company_updated(&event).await {
            tracing::error!(
                "Failed to publish CompanyUpdated event for company {}: {}",
                updated.id,
                e
            );
        }

        Ok(updated)
    }

    async fn delete_company(&self, id: CompanyId, requester: UserId) -> Result<(), CompanyError> {
        if self
            .repository
            .find_by_id_and_owner(id, requester)
            .await?
            .is_none()
        {
            tracing::warn!(
                company_id = %id,
                requester = %requester,
                "Delete rejected: company missing or not owned by requester"
            );
            return Err(CompanyError::NotFoundOrForbidden(id));
        }

        self.repository.delete(id).await.map_err(|e| match e {
            CompanyError::NotFound(id) => CompanyError::NotFoundOrForbidden(id),
            other => other,
        })?;
        tracing::info!(company_id = %id, owner_id = %requester, "Company deleted");

        let event = CompanyDeletedEvent::new(&id, &requester);
        if let Err(e) = self.event_publisher.publish_company_deleted(&event).await {
            tracing::error!(
                "Failed to publish CompanyDeleted event for company {}: {}",
                id,
                e
            );
        }

        Ok(())
    }
}
