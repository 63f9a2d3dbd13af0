use async_trait::async_trait;

use super::errors::CompanyError;
use super::events::CompanyCreatedEvent;
use super::events::CompanyDeletedEvent;
use super::events::CompanyUpdatedEvent;
use super::models::Company;
use super::models::CompanyId;
use super::models::CreateCompanyCommand;
use super::models::UpdateCompanyCommand;
use crate::domain::errors::EventPublisherError;
use crate::domain::user::models::UserId;

/// Port for company domain service operations.
#[async_trait]
pub trait CompanyServicePort: Send + Sync + 'static {
    /// Retrieve company by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_company(&self, id: CompanyId) -> Result<Company, CompanyError>;

    /// Create a company owned by `owner_id`.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Company name already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_company(
        &self,
        command: CreateCompanyCommand,
        owner_id: UserId,
    ) -> Result<Company, CompanyError>;

    /// Patch the supplied fields of a company.
    ///
    /// Ownership is not checked here.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `NameAlreadyExists` - New name already taken
    /// * `DatabaseError` - Database operation failed
    async fn update_company(
        &self,
        id: CompanyId,
        command: UpdateCompanyCommand,
    ) -> Result<Company, CompanyError>;

    /// Delete a company on behalf of `requester`.
    ///
    /// # Errors
    /// * `NotFoundOrForbidden` - Company does not exist or is owned by someone else
    /// * `DatabaseError` - Database operation failed
    async fn delete_company(&self, id: CompanyId, requester: UserId) -> Result<(), CompanyError>;
}

/// Repository port for company persistence operations.
#[async_trait]
pub trait CompanyRepository: Send + Sync + 'static {
    /// Persist a new company entity.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Company name already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, company: Company) -> Result<Company, CompanyError>;

    /// Find company by ID (None if not found).
    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, CompanyError>;

    /// Find company by ID only if it is owned by `owner_id`, in a single lookup.
    async fn find_by_id_and_owner(
        &self,
        id: CompanyId,
        owner_id: UserId,
    ) -> Result<Option<Company>, CompanyError>;

    /// Persist the full state of an existing company.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `NameAlreadyExists` - New name already taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, company: Company) -> Result<Company, CompanyError>;

    /// Remove company from storage.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: CompanyId) -> Result<(), CompanyError>;
}

/// Event publishing for company domain events.
#[async_trait]
pub trait EventPublisher: Send + Sync + 'static {
    async fn publish_company_created(
        &self,
        event: &CompanyCreatedEvent,
    ) -> Result<(), EventPublisherError>;

    async fn publish_company_updated(
        &self,
        event: &CompanyUpdatedEvent,
    ) -> Result<(), EventPublisherError>;

    async fn publish_company_deleted(
        &self,
        event: &CompanyDeletedEvent,
    ) -> Result<(), EventPublisherError>;
}
