use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::create_company::create_company;
use super::handlers::delete_company::delete_company;
use super::handlers::get_company::get_company;
use super::handlers::introspect::introspect;
use super::handlers::update_company::update_company;
use super::middleware::authenticate as auth_middleware;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub company_service: Arc<dyn CompanyServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    company_service: Arc<dyn CompanyServicePort>,
    token_codec: Arc<dyn TokenCodec>,
) -> Router {
    let state = AppState {
        user_service,
        company_service,
    };

    let public_routes = Router::new()
        .route("/v1/auth/login", post(authenticate))
        .route("/v1/companies/:company_id", get(get_company));

    let protected_routes = Router::new()
        .route("/v1/auth/introspect", get(introspect))
        .route("/v1/companies", post(create_company))
        .route("/v1/companies/:company_id", patch(update_company))
        .route("/v1/companies/:company_id", delete(delete_company))
        .route_layer(middleware::from_fn_with_state(token_codec, auth_middleware));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
