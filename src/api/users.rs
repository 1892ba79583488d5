// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! User account endpoints.

use axum::{extract::State, Json};

use crate::{
    auth::{AdminOnly, CurrentUser},
    models::UserResponse,
    state::AppState,
};

/// List every user account. Admin only.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All accounts", body = [UserResponse]),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_users(
    AdminOnly(_principal): AdminOnly,
    State(state): State<AppState>,
) -> Json<Vec<UserResponse>> {
    let store = state.store.read().await;
    Json(store.list_users().into_iter().map(Into::into).collect())
}

/// Get the calling user's own account.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The calling account", body = UserResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(CurrentUser(principal): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: principal.user_id,
        username: principal.username,
        roles: principal.authorities,
    })
}
