// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::middleware::authentication_gate,
    models::{
        AuthenticatedUserResponse, CreateProfileRequest, ProfileResponse, SignInRequest,
        SignUpRequest, UserResponse,
    },
    state::AppState,
};

pub mod authentication;
pub mod health;
pub mod profiles;
pub mod users;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/authentication/sign-up", post(authentication::sign_up))
        .route("/authentication/sign-in", post(authentication::sign_in))
        .route(
            "/profiles",
            get(profiles::list_profiles).post(profiles::create_profile),
        )
        .route(
            "/profiles/{profile_id}",
            get(profiles::get_profile_by_id).delete(profiles::delete_profile_by_id),
        )
        .route(
            "/profiles/by-username/{username}",
            get(profiles::get_profile_by_username),
        )
        .route("/users", get(users::list_users))
        .route("/users/me", get(users::get_current_user))
        .with_state(state.clone());

    Router::new()
        .nest("/api/v1", v1_routes)
        .route("/health", get(health::health))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(axum::middleware::from_fn_with_state(
            state,
            authentication_gate,
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        authentication::sign_up,
        authentication::sign_in,
        profiles::create_profile,
        profiles::get_profile_by_id,
        profiles::list_profiles,
        profiles::delete_profile_by_id,
        profiles::get_profile_by_username,
        users::list_users,
        users::get_current_user,
        health::health
    ),
    components(
        schemas(
            SignUpRequest,
            SignInRequest,
            AuthenticatedUserResponse,
            UserResponse,
            CreateProfileRequest,
            ProfileResponse,
            crate::auth::Role,
            health::HealthResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Account creation and token issuing"),
        (name = "Users", description = "User account management"),
        (name = "Profiles", description = "Player profile management"),
        (name = "Health", description = "Service probes")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
