// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! Player profile endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::CurrentUser,
    error::ApiError,
    models::{CreateProfileRequest, ProfileResponse},
    state::AppState,
};

/// Create the calling user's profile.
///
/// The profile is attached to the authenticated principal; the token
/// subject was already resolved to an account by the authentication gate.
#[utoipa::path(
    post,
    path = "/api/v1/profiles",
    request_body = CreateProfileRequest,
    tag = "Profiles",
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Profile created", body = ProfileResponse),
        (status = 401, description = "Not authenticated"),
        (status = 422, description = "Profile already exists for this user")
    )
)]
pub async fn create_profile(
    CurrentUser(principal): CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let mut store = state.store.write().await;
    let profile = store.create_profile(&principal.user_id, request)?;
    Ok((StatusCode::CREATED, Json(profile.into())))
}

/// Get a profile by id.
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{profile_id}",
    params(("profile_id" = String, Path, description = "Identifier of the profile")),
    tag = "Profiles",
    security(("bearer" = [])),
    responses(
        (status = 200, body = ProfileResponse),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile_by_id(
    CurrentUser(_principal): CurrentUser,
    Path(profile_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let store = state.store.read().await;
    let profile = store.profile_by_id(&profile_id)?;
    Ok(Json(profile.into()))
}

/// List all profiles.
#[utoipa::path(
    get,
    path = "/api/v1/profiles",
    tag = "Profiles",
    security(("bearer" = [])),
    responses((status = 200, body = [ProfileResponse]))
)]
pub async fn list_profiles(
    CurrentUser(_principal): CurrentUser,
    State(state): State<AppState>,
) -> Json<Vec<ProfileResponse>> {
    let store = state.store.read().await;
    Json(store.list_profiles().into_iter().map(Into::into).collect())
}

/// Delete a profile by id.
#[utoipa::path(
    delete,
    path = "/api/v1/profiles/{profile_id}",
    params(("profile_id" = String, Path, description = "Identifier of the profile to delete")),
    tag = "Profiles",
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn delete_profile_by_id(
    CurrentUser(_principal): CurrentUser,
    Path(profile_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.delete_profile(&profile_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the profile belonging to a username.
#[utoipa::path(
    get,
    path = "/api/v1/profiles/by-username/{username}",
    params(("username" = String, Path, description = "Username owning the profile")),
    tag = "Profiles",
    security(("bearer" = [])),
    responses(
        (status = 200, body = ProfileResponse),
        (status = 404, description = "No profile for this username")
    )
)]
pub async fn get_profile_by_username(
    CurrentUser(_principal): CurrentUser,
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let store = state.store.read().await;
    let profile = store.profile_by_username(&username)?;
    Ok(Json(profile.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Principal, Role};
    use chrono::NaiveDate;

    async fn seeded_state() -> (AppState, Principal) {
        let state = AppState::default();
        let user = state
            .store
            .write()
            .await
            .create_user("alice", "hash", vec![Role::User])
            .expect("seed user");
        let principal = Principal {
            user_id: user.id,
            username: user.username,
            authorities: user.roles,
        };
        (state, principal)
    }

    fn profile_request() -> CreateProfileRequest {
        CreateProfileRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            birth_date: NaiveDate::from_ymd_opt(2012, 5, 14).unwrap(),
            sex: "female".into(),
            grade_level: "5th".into(),
            school: "Analytical Primary".into(),
        }
    }

    #[tokio::test]
    async fn create_profile_attaches_to_principal() {
        let (state, principal) = seeded_state().await;

        let (status, Json(profile)) = create_profile(
            CurrentUser(principal.clone()),
            State(state.clone()),
            Json(profile_request()),
        )
        .await
        .expect("profile creation succeeds");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(profile.user_id, principal.user_id);
        assert_eq!(profile.full_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn second_profile_for_same_user_is_unprocessable() {
        let (state, principal) = seeded_state().await;
        create_profile(
            CurrentUser(principal.clone()),
            State(state.clone()),
            Json(profile_request()),
        )
        .await
        .expect("first profile succeeds");

        let err = create_profile(
            CurrentUser(principal),
            State(state),
            Json(profile_request()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn get_list_and_delete_round_trip() {
        let (state, principal) = seeded_state().await;
        let (_, Json(created)) = create_profile(
            CurrentUser(principal.clone()),
            State(state.clone()),
            Json(profile_request()),
        )
        .await
        .unwrap();

        let Json(found) = get_profile_by_id(
            CurrentUser(principal.clone()),
            Path(created.id.clone()),
            State(state.clone()),
        )
        .await
        .expect("profile exists");
        assert_eq!(found, created);

        let Json(all) = list_profiles(CurrentUser(principal.clone()), State(state.clone())).await;
        assert_eq!(all, vec![created.clone()]);

        let status = delete_profile_by_id(
            CurrentUser(principal.clone()),
            Path(created.id.clone()),
            State(state.clone()),
        )
        .await
        .expect("delete succeeds");
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = get_profile_by_id(CurrentUser(principal), Path(created.id), State(state))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn profile_by_username_resolves_the_owner() {
        let (state, principal) = seeded_state().await;
        create_profile(
            CurrentUser(principal.clone()),
            State(state.clone()),
            Json(profile_request()),
        )
        .await
        .unwrap();

        let Json(profile) = get_profile_by_username(
            CurrentUser(principal.clone()),
            Path("alice".into()),
            State(state.clone()),
        )
        .await
        .expect("profile exists");
        assert_eq!(profile.user_id, principal.user_id);

        let err =
            get_profile_by_username(CurrentUser(principal), Path("mallory".into()), State(state))
                .await
                .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
