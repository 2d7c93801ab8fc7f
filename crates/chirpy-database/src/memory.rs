//! In-memory storage backend using `dashmap`.
//!
//! Suitable for tests and single-node development only: nothing survives
//! a restart. One [`MemoryDatabase`] implements both collaborator traits so
//! that deleting users also drops their refresh tokens, matching the
//! `ON DELETE CASCADE` of the PostgreSQL schema.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use chirpy_core::error::AppError;
use chirpy_core::result::AppResult;
use chirpy_core::types::UserId;
use chirpy_entity::session::RefreshToken;
use chirpy_entity::user::{NewUser, User};

use crate::traits::{RefreshTokenRepository, UserDirectory};

/// Process-local users and refresh tokens.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    users: Arc<DashMap<UserId, User>>,
    /// Lowercased email -> owner, the uniqueness index.
    emails: Arc<DashMap<String, UserId>>,
    refresh_tokens: Arc<DashMap<String, RefreshToken>>,
}

impl MemoryDatabase {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_key(email: &str) -> String {
    email.to_lowercase()
}

#[async_trait]
impl UserDirectory for MemoryDatabase {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let user = User::from_new(new_user, Utc::now());
        match self.emails.entry(email_key(&user.email)) {
            Entry::Occupied(_) => return Err(AppError::conflict("Email is already registered")),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.emails.get(&email_key(email)).map(|e| *e.value()) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn set_password_hash(&self, id: UserId, hashed_password: &str) -> AppResult<bool> {
        match self.users.get_mut(&id) {
            Some(mut user) => {
                user.hashed_password = hashed_password.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_credentials(
        &self,
        id: UserId,
        email: &str,
        hashed_password: &str,
    ) -> AppResult<Option<User>> {
        let Some(old_email) = self.users.get(&id).map(|u| u.email.clone()) else {
            return Ok(None);
        };

        let new_key = email_key(email);
        let old_key = email_key(&old_email);
        if new_key != old_key {
            match self.emails.entry(new_key) {
                Entry::Occupied(_) => {
                    return Err(AppError::conflict("Email is already registered"));
                }
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }
            self.emails.remove(&old_key);
        }

        let Some(mut user) = self.users.get_mut(&id) else {
            return Ok(None);
        };
        user.email = email.to_string();
        user.hashed_password = hashed_password.to_string();
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn upgrade(&self, id: UserId) -> AppResult<bool> {
        match self.users.get_mut(&id) {
            Some(mut user) => {
                user.is_chirpy_red = true;
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn reset(&self) -> AppResult<u64> {
        let count = self.users.len() as u64;
        self.users.clear();
        self.emails.clear();
        self.refresh_tokens.clear();
        debug!(count, "Cleared in-memory users and refresh tokens");
        Ok(count)
    }
}

#[async_trait]
impl RefreshTokenRepository for MemoryDatabase {
    async fn insert(&self, token: &RefreshToken) -> AppResult<()> {
        if !self.users.contains_key(&token.user_id) {
            return Err(AppError::database(
                "Refresh token owner does not exist",
            ));
        }
        match self.refresh_tokens.entry(token.token.clone()) {
            Entry::Occupied(_) => Err(AppError::database("Duplicate refresh token")),
            Entry::Vacant(slot) => {
                slot.insert(token.clone());
                Ok(())
            }
        }
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        Ok(self.refresh_tokens.get(token).map(|t| t.value().clone()))
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> AppResult<bool> {
        match self.refresh_tokens.get_mut(token) {
            Some(mut record) => {
                record.revoked_at.get_or_insert(at);
                record.updated_at = at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
