// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! Vik's Adventures API - IAM & Profile Backend
//!
//! Backend service for the Vik's Adventures learning game: JWT bearer
//! authentication plus player profile management.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Bearer-token authentication pipeline and role checks
//! - `store` - In-memory account and profile storage

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
