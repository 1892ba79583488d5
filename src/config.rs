// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! # Runtime Configuration Constants
//!
//! Environment variable names and default values used throughout the
//! application. Configuration is loaded from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `AUTHORIZATION_JWT_SECRET` | HMAC secret for signing/verifying bearer tokens | Required |
//! | `AUTHORIZATION_JWT_EXPIRATION_DAYS` | Issued-token lifetime in days | `7` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SEED_ADMIN_USERNAME` | Bootstrap admin account name | Optional |
//! | `SEED_ADMIN_PASSWORD` | Bootstrap admin account password | Optional |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the token signing secret.
///
/// Treated as raw bytes for HMAC-SHA256. The same secret signs issued
/// tokens and verifies inbound ones; there is no rotation, so changing it
/// invalidates every outstanding token.
pub const JWT_SECRET_ENV: &str = "AUTHORIZATION_JWT_SECRET";

/// Environment variable name for the issued-token lifetime, in days.
pub const JWT_EXPIRATION_DAYS_ENV: &str = "AUTHORIZATION_JWT_EXPIRATION_DAYS";

/// Default token lifetime when [`JWT_EXPIRATION_DAYS_ENV`] is unset.
pub const DEFAULT_JWT_EXPIRATION_DAYS: i64 = 7;

/// Environment variable names for the optional bootstrap admin account.
///
/// When both are set at startup, an admin user is created before the
/// server starts accepting requests.
pub const SEED_ADMIN_USERNAME_ENV: &str = "SEED_ADMIN_USERNAME";
pub const SEED_ADMIN_PASSWORD_ENV: &str = "SEED_ADMIN_PASSWORD";
