// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::{PrincipalResolver, TokenCodec};
use crate::store::{InMemoryStore, StoreIdentities};

/// Shared application state.
///
/// The token codec is read-only after construction; the store sits behind
/// a `RwLock` and also feeds the principal resolver's identity lookups.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub tokens: Arc<TokenCodec>,
    pub principals: PrincipalResolver,
}

impl AppState {
    pub fn new(store: InMemoryStore, tokens: TokenCodec) -> Self {
        let store = Arc::new(RwLock::new(store));
        let principals = PrincipalResolver::new(Arc::new(StoreIdentities(store.clone())));
        Self {
            store,
            tokens: Arc::new(tokens),
            principals,
        }
    }
}

impl Default for AppState {
    /// Empty store with a fixed signing secret. Tests only; `main` always
    /// constructs the codec from `AUTHORIZATION_JWT_SECRET`.
    fn default() -> Self {
        Self::new(
            InMemoryStore::new(),
            TokenCodec::new(b"insecure-dev-secret-do-not-deploy", 3600),
        )
    }
}
