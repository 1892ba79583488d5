// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! # Authentication Module
//!
//! Bearer-token authentication for the Vik's Adventures API.
//!
//! ## Auth Flow
//!
//! 1. Client signs in and receives an HS256-signed JWT
//! 2. Client sends `Authorization: Bearer <token>` on subsequent requests
//! 3. The authentication gate, once per request:
//!    - extracts the raw token (`Bearer` scheme only)
//!    - verifies signature and expiry against the shared secret
//!    - resolves the `sub` claim to a stored account and its authorities
//!    - publishes the resulting [`Principal`] into the request extensions
//!
//! ## Fail-open
//!
//! The gate never rejects a request. Authentication failures are logged
//! (redacted - no token material) and the request continues anonymously;
//! the `CurrentUser`/`AdminOnly` extractors enforce access per route.

pub mod claims;
pub mod codec;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod resolver;
pub mod roles;

pub use claims::{Claims, Principal};
pub use codec::TokenCodec;
pub use error::AuthError;
pub use extractor::{AdminOnly, CurrentUser};
pub use middleware::authentication_gate;
pub use resolver::{Identity, IdentityStore, PrincipalResolver};
pub use roles::Role;
