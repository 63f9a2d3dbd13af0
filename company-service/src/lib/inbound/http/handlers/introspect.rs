use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Profile of the identity the gate attached to this request.
pub async fn introspect(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<UserProfileData>, ApiError> {
    state
        .user_service
        .get_user(&identity.user_id)
        .await
        .map_err(|e| match e {
            // Valid signature, but the subject no longer exists.
            UserError::NotFound(_) => {
                tracing::warn!(user_id = %identity.user_id, "Token subject not found");
                ApiError::Unauthorized("Unauthorized".to_string())
            }
            other => ApiError::from(other),
        })
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileData {
    pub id: String,
    pub name: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfileData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            username: user.username.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
