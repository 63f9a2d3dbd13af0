use std::sync::Arc;

use auth::TokenCodec;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;

/// Identity attached to a request by [`authenticate`].
///
/// Handlers behind the gate take `Extension<AuthenticatedUser>`; the value
/// lives only as long as the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates the bearer token and attaches the caller's identity.
///
/// Missing header, bad signature, expiry and malformed tokens all produce the
/// same 401 response. The failure kind is only logged.
pub async fn authenticate(
    State(token_codec): State<Arc<dyn TokenCodec>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).ok_or_else(|| {
        tracing::warn!("Missing or unreadable Authorization header");
        unauthorized()
    })?;

    let subject = token_codec.validate(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized()
    })?;

    let user_id = UserId::from_string(&subject).map_err(|e| {
        tracing::warn!("Token subject is not a user ID: {}", e);
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Accepts `Bearer <token>` or the bare token.
fn extract_token_from_header(req: &Request) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use auth::JwtError;
    use axum::body::Body;
    use axum::body::to_bytes;
    use axum::middleware;
    use axum::routing::get;
    use axum::Extension;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;

    /// Accepts only tokens of the form `valid:<subject>`.
    struct FakeCodec;

    impl TokenCodec for FakeCodec {
        fn issue(&self, subject: &str) -> Result<String, JwtError> {
            Ok(format!("valid:{}", subject))
        }

        fn validate(&self, token: &str) -> Result<String, JwtError> {
            match token.strip_prefix("valid:") {
                Some(subject) => Ok(subject.to_string()),
                None if token == "expired" => Err(JwtError::Expired),
                None => Err(JwtError::InvalidSignature),
            }
        }
    }

    fn app(calls: Arc<AtomicUsize>) -> Router {
        let codec: Arc<dyn TokenCodec> = Arc::new(FakeCodec);

        Router::new()
            .route(
                "/whoami",
                get(move |Extension(user): Extension<AuthenticatedUser>| async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    user.user_id.to_string()
                }),
            )
            .route_layer(middleware::from_fn_with_state(codec, authenticate))
    }

    async fn send(authorization: Option<String>) -> (StatusCode, String, usize) {
        let calls = Arc::new(AtomicUsize::new(0));

        let mut request = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }

        let response = app(calls.clone())
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (
            status,
            String::from_utf8(body.to_vec()).unwrap(),
            calls.load(Ordering::SeqCst),
        )
    }

    #[tokio::test]
    async fn test_bearer_token_attaches_identity() {
        let user_id = UserId::new();

        let (status, body, calls) = send(Some(format!("Bearer valid:{}", user_id))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, user_id.to_string());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_bare_token_is_accepted() {
        let user_id = UserId::new();

        let (status, body, _) = send(Some(format!("valid:{}", user_id))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, user_id.to_string());
    }

    #[tokio::test]
    async fn test_missing_header_short_circuits() {
        let (status, body, calls) = send(None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"Unauthorized"}"#);
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_all_rejections_look_the_same() {
        let missing = send(None).await;
        let empty = send(Some("Bearer ".to_string())).await;
        let expired = send(Some("Bearer expired".to_string())).await;
        let forged = send(Some("Bearer forged".to_string())).await;
        let bad_subject = send(Some("Bearer valid:not-a-uuid".to_string())).await;

        for rejected in [&empty, &expired, &forged, &bad_subject] {
            assert_eq!(rejected, &missing);
        }
    }
}
