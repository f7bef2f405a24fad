use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory session table
///
/// Maps opaque bearer tokens to usernames. Tokens are random UUIDs and live
/// until logout or process restart; there is no expiry.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, String>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh session token for a user
    pub async fn issue(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), username.to_string());
        tracing::debug!("Issued session for {}", username);
        token
    }

    /// Resolve a token to the logged-in username
    pub async fn resolve(&self, token: &str) -> Option<String> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Revoke a token; returns whether it was active
    pub async fn revoke(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
