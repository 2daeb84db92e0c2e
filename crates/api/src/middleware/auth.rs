//! Authentication middleware.
//!
//! Every customer route requires the shared service token in the
//! `Authorization` header, compared verbatim.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;

/// Middleware that rejects requests without the configured token.
pub async fn require_token(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if token != Some(state.config.security.auth_token.as_str()) {
        return ApiError::Unauthorized("Unauthorized".to_string()).into_response();
    }

    next.run(req).await
}
