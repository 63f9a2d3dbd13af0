use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::ports::CompanyServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<ApiSuccess<CompanyResponseData>, ApiError> {
    let company_id = CompanyId::from_string(&company_id).map_err(CompanyError::from)?;

    state
        .company_service
        .get_company(company_id)
        .await
        .map_err(ApiError::from)
        .map(|ref company| ApiSuccess::new(StatusCode::OK, company.into()))
}

/// Outward representation of a company, shared by every company route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyResponseData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub employees_amount: i32,
    pub registered: bool,
    #[serde(rename = "type")]
    pub company_type: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Company> for CompanyResponseData {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.to_string(),
            name: company.name.as_str().to_string(),
            description: company.description.as_str().to_string(),
            employees_amount: company.employees_amount.value(),
            registered: company.registered,
            company_type: company.company_type.as_str().to_string(),
            owner_id: company.owner_id.to_string(),
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}
