// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! # API Data Models
//!
//! Request and response structures for the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation.
//!
//! ## Model Categories
//!
//! - **Authentication**: sign-up / sign-in requests and the issued token
//! - **Users**: account views (never the password hash)
//! - **Profiles**: player profile creation and views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Role;
use crate::store::{Profile, User};

// =============================================================================
// Authentication Models
// =============================================================================

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignUpRequest {
    /// Desired username (token subject once signed in).
    pub username: String,
    /// Plain-text password; stored only as a bcrypt hash.
    pub password: String,
    /// Role names to grant. Defaults to `user` when empty.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Request to sign in with existing credentials.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Response for a successful sign-in: the account plus a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUserResponse {
    /// Account id.
    pub id: String,
    /// Account username.
    pub username: String,
    /// Signed bearer token for the `Authorization` header.
    pub token: String,
}

// =============================================================================
// User Models
// =============================================================================

/// Public view of a user account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserResponse {
    /// Account id.
    pub id: String,
    /// Account username.
    pub username: String,
    /// Granted authorities.
    pub roles: Vec<Role>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            roles: user.roles,
        }
    }
}

// =============================================================================
// Profile Models
// =============================================================================

/// Request to create the calling user's player profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    /// Date of birth (ISO 8601 date).
    pub birth_date: NaiveDate,
    pub sex: String,
    /// School grade the player is enrolled in.
    pub grade_level: String,
    pub school: String,
}

/// Public view of a player profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ProfileResponse {
    /// Profile id.
    pub id: String,
    /// Owning account id.
    pub user_id: String,
    /// First and last name joined for display.
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub grade_level: String,
    pub school: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            full_name: format!("{} {}", profile.first_name, profile.last_name),
            birth_date: profile.birth_date,
            sex: profile.sex,
            grade_level: profile.grade_level,
            school: profile.school,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_response_joins_full_name() {
        let profile = Profile {
            id: "p-1".into(),
            user_id: "u-1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            birth_date: NaiveDate::from_ymd_opt(2012, 5, 14).unwrap(),
            sex: "female".into(),
            grade_level: "5th".into(),
            school: "Analytical Primary".into(),
        };

        let response = ProfileResponse::from(profile);
        assert_eq!(response.full_name, "Ada Lovelace");
        assert_eq!(response.user_id, "u-1");
    }

    #[test]
    fn user_response_carries_no_password_material() {
        let user = User {
            id: "u-1".into(),
            username: "alice".into(),
            password_hash: "$2b$12$secret".into(),
            roles: vec![Role::User],
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("alice"));
    }
}
