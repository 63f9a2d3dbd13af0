use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::get_company::CompanyResponseData;
use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::CompanyName;
use crate::domain::company::models::CompanyType;
use crate::domain::company::models::Description;
use crate::domain::company::models::EmployeesAmount;
use crate::domain::company::models::UpdateCompanyCommand;
use crate::domain::company::ports::CompanyServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a company (raw JSON)
///
/// Absent fields, empty strings and a zero employee count are all treated as
/// "not supplied".
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub employees_amount: Option<i32>,
    pub registered: Option<bool>,
    #[serde(rename = "type")]
    pub company_type: Option<String>,
}

impl UpdateCompanyRequest {
    fn try_into_command(self) -> Result<UpdateCompanyCommand, CompanyError> {
        let name = non_empty(self.name).map(CompanyName::new).transpose()?;
        let description = non_empty(self.description)
            .map(Description::new)
            .transpose()?;
        let employees_amount = self
            .employees_amount
            .filter(|amount| *amount != 0)
            .map(EmployeesAmount::new)
            .transpose()?;
        let company_type = non_empty(self.company_type)
            .map(|t| t.parse::<CompanyType>())
            .transpose()?;

        Ok(UpdateCompanyCommand {
            name,
            description,
            employees_amount,
            registered: self.registered,
            company_type,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub async fn update_company(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(company_id): Path<String>,
    JsonBody(req): JsonBody<UpdateCompanyRequest>,
) -> Result<ApiSuccess<CompanyResponseData>, ApiError> {
    let company_id = CompanyId::from_string(&company_id).map_err(CompanyError::from)?;
    let command = req.try_into_command()?;

    tracing::debug!(company_id = %company_id, user_id = %identity.user_id, "Updating company");

    state
        .company_service
        .update_company(company_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref company| ApiSuccess::new(StatusCode::OK, company.into()))
}
