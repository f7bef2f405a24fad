use crate::models::{DonationRecord, User};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur when interacting with the in-memory stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User already exists: {0}")]
    DuplicateUser(String),
}

/// In-memory user store
///
/// Process-wide state with no persistence guarantee; accounts vanish on
/// restart. Keyed by username, which doubles as the uniqueness constraint.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user, rejecting duplicate usernames
    pub async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(StoreError::DuplicateUser(user.username));
        }

        tracing::debug!("Registered user: {}", user.username);
        users.insert(user.username.clone(), user);
        Ok(())
    }

    /// Look up a user by username
    pub async fn get(&self, username: &str) -> Option<User> {
        self.users.read().await.get(username).cloned()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

/// In-memory donation audit log
///
/// Append-only; listing returns the newest entry first.
#[derive(Debug, Default)]
pub struct DonationLog {
    entries: RwLock<Vec<DonationRecord>>,
}

impl DonationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, record: DonationRecord) {
        let mut entries = self.entries.write().await;
        entries.push(record);
        tracing::debug!("Donation log now holds {} entries", entries.len());
    }

    /// All donations, newest first
    pub async fn list_newest_first(&self) -> Vec<DonationRecord> {
        let entries = self.entries.read().await;
        entries.iter().rev().cloned().collect()
    }
}
