//! State Repository
//!
//! Serializes the top-level collections and session pointers over any
//! [`KeyValueStore`]. An unreadable blob is logged and treated as
//! absent; the store layer falls back to seed data in that case rather
//! than failing startup.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::traits::KeyValueStore;
use crate::domain::{Client, DomainError, DomainResult, User};

const CLIENTS_KEY: &str = "clients";
const USERS_KEY: &str = "users";
const ACTIVE_CLIENT_KEY: &str = "activeClientId";
const CURRENT_USER_KEY: &str = "currentUserId";

pub struct StateRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StateRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load_clients(&self) -> DomainResult<Option<Vec<Client>>> {
        self.load_collection(CLIENTS_KEY).await
    }

    pub async fn save_clients(&self, clients: &[Client]) -> DomainResult<()> {
        self.save_collection(CLIENTS_KEY, clients).await
    }

    pub async fn load_users(&self) -> DomainResult<Option<Vec<User>>> {
        self.load_collection(USERS_KEY).await
    }

    pub async fn save_users(&self, users: &[User]) -> DomainResult<()> {
        self.save_collection(USERS_KEY, users).await
    }

    /// Pointers are stored as bare id strings, not JSON.
    pub async fn load_active_client_id(&self) -> DomainResult<Option<String>> {
        self.store.get(ACTIVE_CLIENT_KEY).await
    }

    pub async fn save_active_client_id(&self, id: Option<&str>) -> DomainResult<()> {
        match id {
            Some(id) => self.store.set(ACTIVE_CLIENT_KEY, id).await,
            None => self.store.remove(ACTIVE_CLIENT_KEY).await,
        }
    }

    pub async fn load_current_user_id(&self) -> DomainResult<Option<String>> {
        self.store.get(CURRENT_USER_KEY).await
    }

    pub async fn save_current_user_id(&self, id: Option<&str>) -> DomainResult<()> {
        match id {
            Some(id) => self.store.set(CURRENT_USER_KEY, id).await,
            None => self.store.remove(CURRENT_USER_KEY).await,
        }
    }

    async fn load_collection<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> DomainResult<Option<Vec<T>>> {
        let text = match self.store.get(key).await? {
            Some(text) => text,
            None => return Ok(None),
        };

        match serde_json::from_str(&text) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable stored blob");
                Ok(None)
            }
        }
    }

    async fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> DomainResult<()> {
        let text =
            serde_json::to_string(items).map_err(|e| DomainError::Internal(e.to_string()))?;
        self.store.set(key, &text).await
    }
}
