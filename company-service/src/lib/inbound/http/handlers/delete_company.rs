use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::CompanyId;
use crate::domain::company::ports::CompanyServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Only the owner may delete. A company owned by someone else answers with
/// the same 404 as one that does not exist.
pub async fn delete_company(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(company_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let company_id = CompanyId::from_string(&company_id).map_err(CompanyError::from)?;

    state
        .company_service
        .delete_company(company_id, identity.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
