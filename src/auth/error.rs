// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors produced by the bearer authentication pipeline.
///
/// The first five variants are pipeline outcomes: the request-level gate
/// catches every one of them and lets the request continue anonymously.
/// The remaining variants are route-level rejections raised by the
/// `CurrentUser`/`AdminOnly` extractors, which do reach the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Token cannot be parsed into the expected structure
    #[error("token is malformed")]
    Malformed,
    /// Token signature does not verify against the configured secret
    #[error("token signature is invalid")]
    InvalidSignature,
    /// Token expiry claim is in the past
    #[error("token has expired")]
    Expired,
    /// Token validated but carries no usable subject claim
    #[error("token does not carry a subject")]
    MissingSubject,
    /// Subject claim matches no identity record
    #[error("no account matches the token subject")]
    UnknownSubject,
    /// Route requires an authenticated principal
    #[error("authentication is required")]
    Unauthenticated,
    /// Principal lacks the authority the route requires
    #[error("insufficient permissions for this operation")]
    InsufficientPermissions,
    /// Token could not be produced
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Malformed => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Expired => "token_expired",
            AuthError::MissingSubject => "missing_subject",
            AuthError::UnknownSubject => "unknown_subject",
            AuthError::Unauthenticated => "unauthenticated",
            AuthError::InsufficientPermissions => "insufficient_permissions",
            AuthError::Encoding(_) => "token_encoding_failed",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Malformed
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::MissingSubject
            | AuthError::UnknownSubject
            | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
            AuthError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn unauthenticated_returns_401() {
        let response = AuthError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error_code"], "unauthenticated");
    }

    #[tokio::test]
    async fn insufficient_permissions_returns_403() {
        let response = AuthError::InsufficientPermissions.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn pipeline_errors_map_to_401() {
        for err in [
            AuthError::Malformed,
            AuthError::InvalidSignature,
            AuthError::Expired,
            AuthError::MissingSubject,
            AuthError::UnknownSubject,
        ] {
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        }
    }
}
