use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Exchange a username/password pair for a signed token.
///
/// Every credential failure produces the same 401 body, whether or not the
/// username exists.
pub async fn authenticate(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    state
        .user_service
        .authenticate(&body.username, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, AuthenticateResponseData { token }))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    username: String,
    password: String,
}

impl std::fmt::Debug for AuthenticateRequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticateRequestBody")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
}
