use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::principal::models::PrincipalKind;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Token subject stored in request extensions for protected handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub email: String,
    pub kind: PrincipalKind,
}

/// Middleware that validates bearer tokens and records the subject in
/// request extensions. Validation is signature + expiry only; no store
/// lookup happens here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    let kind = claims.kind().parse::<PrincipalKind>().map_err(|e| {
        tracing::warn!(error = %e, "Token carries an unknown subject kind");
        ApiError::Unauthorized("Invalid token subject".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedPrincipal {
        email: claims.email().to_string(),
        kind,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req.headers().get(AUTHORIZATION).ok_or_else(|| {
        ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
    })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response()
    })
}
