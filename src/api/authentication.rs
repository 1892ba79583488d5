// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! Sign-up and sign-in endpoints: the token-issuing side of IAM.

use axum::{extract::State, http::StatusCode, Json};
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::{
    auth::Role,
    error::ApiError,
    models::{AuthenticatedUserResponse, SignInRequest, SignUpRequest, UserResponse},
    state::AppState,
};

fn parse_roles(names: &[String]) -> Result<Vec<Role>, ApiError> {
    if names.is_empty() {
        return Ok(vec![Role::User]);
    }
    names
        .iter()
        .map(|name| {
            Role::parse(name).ok_or_else(|| ApiError::bad_request(format!("Unknown role: {name}")))
        })
        .collect()
}

/// Create a new user account.
#[utoipa::path(
    post,
    path = "/api/v1/authentication/sign-up",
    request_body = SignUpRequest,
    tag = "Authentication",
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Invalid username, password or role"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    if request.username.trim().is_empty() {
        return Err(ApiError::bad_request("Username must not be blank"));
    }
    if request.password.len() < 8 {
        return Err(ApiError::bad_request(
            "Password must be at least 8 characters",
        ));
    }

    let roles = parse_roles(&request.roles)?;
    let password_hash = hash(&request.password, DEFAULT_COST)
        .map_err(|e| ApiError::internal(format!("Password hashing failed: {e}")))?;

    let mut store = state.store.write().await;
    let user = store.create_user(request.username.trim(), password_hash, roles)?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Sign in and receive a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/authentication/sign-in",
    request_body = SignInRequest,
    tag = "Authentication",
    responses(
        (status = 200, description = "Signed in", body = AuthenticatedUserResponse),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<AuthenticatedUserResponse>, ApiError> {
    let user = {
        let store = state.store.read().await;
        store.user_by_username(&request.username)
    }
    .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    let password_ok = verify(&request.password, &user.password_hash)
        .map_err(|e| ApiError::internal(format!("Password verification failed: {e}")))?;
    if !password_ok {
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    let token = state
        .tokens
        .issue(&user.username, &user.roles)
        .map_err(|e| ApiError::internal(format!("Token issuing failed: {e}")))?;

    Ok(Json(AuthenticatedUserResponse {
        id: user.id,
        username: user.username,
        token,
    }))
}
