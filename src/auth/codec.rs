// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! Symmetric JWT encoding and decoding.
//!
//! One HMAC-SHA256 secret, supplied at process start, signs and verifies
//! every token. There is no key rotation and no asymmetric mode; the keys
//! are derived once and are read-only afterwards, so a single codec is
//! shared across all request tasks.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::Claims;
use super::error::AuthError;
use super::roles::Role;

/// Encodes and decodes bearer tokens against the shared secret.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenCodec {
    /// Create a codec from the raw secret bytes and a token lifetime.
    pub fn new(secret: &[u8], ttl_seconds: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the issuer's own clock; no skew allowance.
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_seconds,
        }
    }

    /// Sign a claims set into a compact token string.
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Encoding(e.to_string()))
    }

    /// Issue a fresh token for `subject` using the configured lifetime.
    pub fn issue(&self, subject: &str, roles: &[Role]) -> Result<String, AuthError> {
        self.encode(&Claims::new(subject, roles, self.ttl_seconds))
    }

    /// Verify a raw token and return its claims.
    ///
    /// Signature and expiry failures are reported as distinct errors;
    /// everything else the library rejects is a malformed token.
    pub fn decode(&self, raw: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(raw, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::Malformed,
            })?;
        Ok(token_data.claims)
    }
}
