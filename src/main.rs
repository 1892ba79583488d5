// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use viks_adventures_api::api::router;
use viks_adventures_api::auth::{Role, TokenCodec};
use viks_adventures_api::config::{
    DEFAULT_JWT_EXPIRATION_DAYS, JWT_EXPIRATION_DAYS_ENV, JWT_SECRET_ENV, SEED_ADMIN_PASSWORD_ENV,
    SEED_ADMIN_USERNAME_ENV,
};
use viks_adventures_api::state::AppState;
use viks_adventures_api::store::InMemoryStore;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let format = env::var("LOG_FORMAT").unwrap_or_default();
    if format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    // The signing secret is mandatory; refusing to start beats issuing
    // unverifiable tokens.
    let secret = env::var(JWT_SECRET_ENV)
        .unwrap_or_else(|_| panic!("{JWT_SECRET_ENV} must be set"));

    let ttl_days: i64 = env::var(JWT_EXPIRATION_DAYS_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_JWT_EXPIRATION_DAYS);
    let tokens = TokenCodec::new(secret.as_bytes(), ttl_days * 24 * 60 * 60);

    let mut store = InMemoryStore::new();
    if let (Ok(username), Ok(password)) = (
        env::var(SEED_ADMIN_USERNAME_ENV),
        env::var(SEED_ADMIN_PASSWORD_ENV),
    ) {
        let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
            .expect("Failed to hash seed admin password");
        store
            .create_user(username.as_str(), password_hash, vec![Role::Admin, Role::User])
            .expect("Failed to seed admin account");
        tracing::info!(username = %username, "seeded admin account");
    }

    let state = AppState::new(store, tokens);
    let app = router(state);

    // Parse bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Vik's Adventures API listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    tracing::info!("shutdown signal received");
}
