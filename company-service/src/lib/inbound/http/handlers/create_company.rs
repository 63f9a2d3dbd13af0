use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::get_company::CompanyResponseData;
use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::CompanyName;
use crate::domain::company::models::CreateCompanyCommand;
use crate::domain::company::models::Description;
use crate::domain::company::models::EmployeesAmount;
use crate::domain::company::ports::CompanyServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// The caller's identity becomes the owner of the new company.
pub async fn create_company(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<CreateCompanyRequest>,
) -> Result<ApiSuccess<CompanyResponseData>, ApiError> {
    state
        .company_service
        .create_company(body.try_into_command()?, identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref company| ApiSuccess::new(StatusCode::CREATED, company.into()))
}

/// HTTP request body for creating a company (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCompanyRequest {
    name: String,
    #[serde(default)]
    description: String,
    employees_amount: i32,
    #[serde(default)]
    registered: bool,
    #[serde(rename = "type", default)]
    company_type: String,
}

impl CreateCompanyRequest {
    fn try_into_command(self) -> Result<CreateCompanyCommand, CompanyError> {
        Ok(CreateCompanyCommand {
            name: CompanyName::new(self.name)?,
            description: Description::new(self.description)?,
            employees_amount: EmployeesAmount::new(self.employees_amount)?,
            registered: self.registered,
            company_type: self.company_type.parse()?,
        })
    }
}
