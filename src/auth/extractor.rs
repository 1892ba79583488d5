// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! Bearer token extraction and principal extractors.
//!
//! [`bearer_token`] is the syntactic half of the pipeline: it pulls the raw
//! token out of the `Authorization` header without looking inside it.
//!
//! The extractors consume what the authentication gate published. Handlers
//! that require a caller use [`CurrentUser`]; admin endpoints use
//! [`AdminOnly`]:
//!
//! ```rust,ignore
//! async fn my_handler(CurrentUser(principal): CurrentUser) -> impl IntoResponse {
//!     // principal is the resolved Principal
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use super::claims::Principal;
use super::error::AuthError;

/// Scheme prefix recognized in the `Authorization` header. Case-sensitive.
const BEARER_PREFIX: &str = "Bearer ";

/// Extract the raw bearer token from the request headers.
///
/// Returns `None` when the header is missing, empty, or does not use the
/// `Bearer` scheme. The token content is not validated here.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Extractor for the authenticated principal of the current request.
///
/// Rejects with `401 Unauthorized` when the gate left the request
/// anonymous. This is where route-level authorization turns an anonymous
/// request into a visible error; the gate itself never does.
pub struct CurrentUser(pub Principal);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AuthError::Unauthenticated)
    }
}

/// Extractor that additionally requires the admin authority.
///
/// Rejects with `403 Forbidden` for authenticated non-admins.
pub struct AdminOnly(pub Principal);

impl<S: Send + Sync> FromRequestParts<S> for AdminOnly {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(principal) = CurrentUser::from_request_parts(parts, state).await?;

        if !principal.is_admin() {
            return Err(AuthError::InsufficientPermissions);
        }

        Ok(AdminOnly(principal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::roles::Role;
    use axum::http::Request;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn extracts_token_from_bearer_scheme() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn lowercase_scheme_is_not_recognized() {
        let headers = headers_with_authorization("bearer abc");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn missing_scheme_is_not_recognized() {
        let headers = headers_with_authorization("abc");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn missing_or_empty_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let empty = headers_with_authorization("");
        assert_eq!(bearer_token(&empty), None);

        let scheme_only = headers_with_authorization("Bearer ");
        assert_eq!(bearer_token(&scheme_only), None);
    }

    fn parts_with_principal(principal: Option<Principal>) -> Parts {
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;
        if let Some(principal) = principal {
            parts.extensions.insert(principal);
        }
        parts
    }

    fn principal(roles: Vec<Role>) -> Principal {
        Principal {
            user_id: "u-1".into(),
            username: "alice".into(),
            authorities: roles,
        }
    }

    #[tokio::test]
    async fn current_user_rejects_anonymous_requests() {
        let mut parts = parts_with_principal(None);
        let result = CurrentUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn current_user_returns_published_principal() {
        let mut parts = parts_with_principal(Some(principal(vec![Role::User])));
        let CurrentUser(found) = CurrentUser::from_request_parts(&mut parts, &())
            .await
            .expect("principal was published");
        assert_eq!(found.username, "alice");
    }

    #[tokio::test]
    async fn admin_only_rejects_non_admin() {
        let mut parts = parts_with_principal(Some(principal(vec![Role::User])));
        let result = AdminOnly::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::InsufficientPermissions)));
    }

    #[tokio::test]
    async fn admin_only_accepts_admin() {
        let mut parts = parts_with_principal(Some(principal(vec![Role::Admin])));
        let result = AdminOnly::from_request_parts(&mut parts, &()).await;
        assert!(result.is_ok());
    }
}
