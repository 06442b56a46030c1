use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Access gate: verifies the bearer token before a protected handler runs.
///
/// A request without an Authorization header is rejected outright; a
/// present token that fails verification for any reason (bad signature,
/// malformed, expired) gets one uniform rejection so callers cannot tell
/// which check failed. Verified requests pass through unchanged: decoded
/// claims are not attached to the request, so downstream handlers that
/// need the identity must re-derive it.
pub async fn require_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("No token provided".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    // The original service read the header verbatim; accept both the bare
    // token and the Bearer scheme.
    Ok(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str))
}
