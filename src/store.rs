// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Vik's Adventures

//! In-memory store for user accounts and player profiles.
//!
//! The store is wrapped in `Arc<RwLock<_>>` by [`crate::state::AppState`];
//! all mutation goes through handler-held write locks. It also backs the
//! [`IdentityStore`] capability consumed by the authentication resolver.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::{Identity, IdentityStore, Role};
use crate::error::ApiError;
use crate::models::CreateProfileRequest;

/// A stored user account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    /// bcrypt hash; never leaves the store in API responses.
    pub password_hash: String,
    pub roles: Vec<Role>,
}

/// A stored player profile. One per user.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: chrono::NaiveDate,
    pub sex: String,
    pub grade_level: String,
    pub school: String,
}

#[derive(Default)]
pub struct InMemoryStore {
    users: HashMap<String, User>,
    profiles: HashMap<String, Profile>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_user(
        &mut self,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        roles: Vec<Role>,
    ) -> Result<User, ApiError> {
        let username = username.into();
        if self.user_by_username(&username).is_some() {
            return Err(ApiError::conflict("Username is already taken"));
        }

        let id = Uuid::new_v4().to_string();
        let user = User {
            id: id.clone(),
            username,
            password_hash: password_hash.into(),
            roles,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn create_profile(
        &mut self,
        user_id: &str,
        request: CreateProfileRequest,
    ) -> Result<Profile, ApiError> {
        if self
            .profiles
            .values()
            .any(|profile| profile.user_id == user_id)
        {
            return Err(ApiError::unprocessable(
                "A profile already exists for this user.",
            ));
        }

        let id = Uuid::new_v4().to_string();
        let profile = Profile {
            id: id.clone(),
            user_id: user_id.to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
            sex: request.sex,
            grade_level: request.grade_level,
            school: request.school,
        };
        self.profiles.insert(id, profile.clone());
        Ok(profile)
    }

    pub fn profile_by_id(&self, profile_id: &str) -> Result<Profile, ApiError> {
        self.profiles
            .get(profile_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Profile not found"))
    }

    pub fn list_profiles(&self) -> Vec<Profile> {
        self.profiles.values().cloned().collect()
    }

    pub fn delete_profile(&mut self, profile_id: &str) -> Result<(), ApiError> {
        if self.profiles.remove(profile_id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found("Profile not found"))
        }
    }

    pub fn profile_by_username(&self, username: &str) -> Result<Profile, ApiError> {
        let user = self
            .user_by_username(username)
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        self.profiles
            .values()
            .find(|profile| profile.user_id == user.id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Profile not found"))
    }
}

/// Identity lookup backed by the shared store.
pub struct StoreIdentities(pub Arc<RwLock<InMemoryStore>>);

#[async_trait]
impl IdentityStore for StoreIdentities {
    async fn find_by_username(&self, username: &str) -> Option<Identity> {
        let store = self.0.read().await;
        store.user_by_username(username).map(|user| Identity {
            user_id: user.id,
            username: user.username,
            roles: user.roles,
        })
    }
}
