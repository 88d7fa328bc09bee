use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::me::current_principal;
use super::handlers::offers::create_offer::create_offer;
use super::handlers::offers::list_offers::list_offers;
use super::handlers::principals::list::list_companies;
use super::handlers::principals::list::list_postulants;
use super::handlers::principals::register::register_company;
use super::handlers::principals::register::register_postulant;
use super::middleware::authenticate as auth_middleware;
use crate::domain::offer::ports::OfferServicePort;
use crate::domain::principal::ports::PrincipalServicePort;

#[derive(Clone)]
pub struct AppState {
    pub principal_service: Arc<dyn PrincipalServicePort>,
    pub offer_service: Arc<dyn OfferServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(
    principal_service: Arc<dyn PrincipalServicePort>,
    offer_service: Arc<dyn OfferServicePort>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
) -> Router {
    let state = AppState {
        principal_service,
        offer_service,
        authenticator,
        jwt_expiration_hours,
    };

    let public_routes = Router::new()
        .route("/login", post(login))
        .route("/postulants", post(register_postulant).get(list_postulants))
        .route("/companies", post(register_company).get(list_companies))
        .route("/offers", post(create_offer).get(list_offers));

    let protected_routes = Router::new()
        .route("/me", get(current_principal))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
