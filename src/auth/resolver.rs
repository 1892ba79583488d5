// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! Subject-to-principal resolution.
//!
//! The token only proves *who signed in*; the authorities attached to the
//! request come from the identity record looked up here, so revoking a
//! role takes effect on the next request rather than at token expiry.

use std::sync::Arc;

use async_trait::async_trait;

use super::claims::Principal;
use super::error::AuthError;
use super::roles::Role;

/// Identity record returned by the identity store.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Account id
    pub user_id: String,
    /// Account username (token subject)
    pub username: String,
    /// Granted authorities
    pub roles: Vec<Role>,
}

/// Lookup capability over stored accounts, keyed by username.
///
/// Injected into the resolver so the authentication pipeline can be
/// exercised against a fake store in tests.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Find the identity record for `username`, if one exists.
    async fn find_by_username(&self, username: &str) -> Option<Identity>;
}

/// Maps validated token subjects to request principals.
#[derive(Clone)]
pub struct PrincipalResolver {
    identities: Arc<dyn IdentityStore>,
}

impl PrincipalResolver {
    /// Create a resolver over the given identity store.
    pub fn new(identities: Arc<dyn IdentityStore>) -> Self {
        Self { identities }
    }

    /// Resolve `subject` to a principal.
    ///
    /// Fails with [`AuthError::UnknownSubject`] when no record matches.
    pub async fn resolve(&self, subject: &str) -> Result<Principal, AuthError> {
        let identity = self
            .identities
            .find_by_username(subject)
            .await
            .ok_or(AuthError::UnknownSubject)?;

        Ok(Principal {
            user_id: identity.user_id,
            username: identity.username,
            authorities: identity.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeIdentityStore {
        records: HashMap<String, Identity>,
    }

    impl FakeIdentityStore {
        fn with_user(username: &str, roles: Vec<Role>) -> Self {
            let identity = Identity {
                user_id: format!("id-{username}"),
                username: username.to_string(),
                roles,
            };
            Self {
                records: HashMap::from([(username.to_string(), identity)]),
            }
        }
    }

    #[async_trait]
    impl IdentityStore for FakeIdentityStore {
        async fn find_by_username(&self, username: &str) -> Option<Identity> {
            self.records.get(username).cloned()
        }
    }

    #[tokio::test]
    async fn resolve_maps_record_to_principal() {
        let store = FakeIdentityStore::with_user("alice", vec![Role::User, Role::Admin]);
        let resolver = PrincipalResolver::new(Arc::new(store));

        let principal = resolver.resolve("alice").await.expect("alice exists");
        assert_eq!(principal.user_id, "id-alice");
        assert_eq!(principal.username, "alice");
        assert_eq!(principal.authorities, vec![Role::User, Role::Admin]);
    }

    #[tokio::test]
    async fn resolve_unknown_subject_fails() {
        let store = FakeIdentityStore::with_user("alice", vec![Role::User]);
        let resolver = PrincipalResolver::new(Arc::new(store));

        let err = resolver.resolve("mallory").await.unwrap_err();
        assert_eq!(err, AuthError::UnknownSubject);
    }
}
