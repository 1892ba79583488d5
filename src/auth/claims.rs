// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! JWT claims and the resolved request principal.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::roles::Role;

/// Claims carried inside a signed bearer token.
///
/// Issued by [`crate::auth::codec::TokenCodec::issue`] at sign-in and read
/// back by `decode`. Immutable once issued; a decoded copy lives for the
/// duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the account username
    #[serde(default)]
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// Role names granted at issue time
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Build claims for `subject` expiring `ttl_seconds` from now.
    pub fn new(subject: impl Into<String>, roles: &[Role], ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: subject.into(),
            iat: now,
            exp: now + ttl_seconds,
            roles: roles.iter().map(Role::to_string).collect(),
        }
    }
}

/// Identity resolved for the current request.
///
/// Produced by the authentication gate from a validated token subject and
/// the matching identity record, then published into request extensions.
/// Owned by that request; handlers receive it through the `CurrentUser`
/// and `AdminOnly` extractors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    /// Account id of the resolved user
    pub user_id: String,

    /// Account username (the token subject)
    pub username: String,

    /// Authorities granted by the identity record
    pub authorities: Vec<Role>,
}

impl Principal {
    /// Check if the principal holds at least the required authority.
    pub fn has_authority(&self, required: Role) -> bool {
        self.authorities
            .iter()
            .any(|role| role.has_privilege(required))
    }

    /// Check if this principal is an admin.
    pub fn is_admin(&self) -> bool {
        self.authorities.contains(&Role::Admin)
    }
}
