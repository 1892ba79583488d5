// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! Bearer authentication gate.
//!
//! Applied once to the whole router via
//! `axum::middleware::from_fn_with_state`. For every request it runs
//! extract -> decode -> resolve and, on success, publishes the resulting
//! [`Principal`] into the request extensions before any handler runs.
//!
//! The gate is fail-open: an authentication failure never aborts the
//! request. Every pipeline error is matched to "continue anonymous" below,
//! and access denial happens later, at route level, in the `CurrentUser`
//! and `AdminOnly` extractors. The only side effect of this middleware is
//! publishing (or not publishing) the principal.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use super::claims::Principal;
use super::error::AuthError;
use super::extractor::bearer_token;
use crate::state::AppState;

/// Authentication middleware applied to every inbound request.
pub async fn authentication_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(principal) = authenticate(&state, request.headers()).await {
        request.extensions_mut().insert(principal);
    }
    next.run(request).await
}

/// Run the pipeline for one request, reducing every failure to anonymous.
///
/// Token values are never logged; events carry error codes and, once the
/// token has validated, the subject.
async fn authenticate(state: &AppState, headers: &HeaderMap) -> Option<Principal> {
    let token = bearer_token(headers)?;

    match resolve_principal(state, token).await {
        Ok(principal) => {
            tracing::debug!(username = %principal.username, "request authenticated");
            Some(principal)
        }
        Err(err @ (AuthError::Malformed | AuthError::InvalidSignature | AuthError::Expired)) => {
            tracing::warn!(error_code = err.error_code(), "bearer token rejected, continuing anonymous");
            None
        }
        Err(err @ (AuthError::MissingSubject | AuthError::UnknownSubject)) => {
            tracing::warn!(error_code = err.error_code(), "token subject did not resolve, continuing anonymous");
            None
        }
        Err(err) => {
            // Unreachable through this pipeline, but still fail open.
            tracing::error!(error_code = err.error_code(), "unexpected authentication failure, continuing anonymous");
            None
        }
    }
}

/// Decode the token and resolve its subject to a principal.
async fn resolve_principal(state: &AppState, token: &str) -> Result<Principal, AuthError> {
    let claims = state.tokens.decode(token)?;

    if claims.sub.trim().is_empty() {
        return Err(AuthError::MissingSubject);
    }

    state.principals.resolve(&claims.sub).await
}
