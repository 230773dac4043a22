//! Session storage with per-user locking and idle expiry.
//!
//! The map hands out `Arc<Mutex<Session>>` handles, so two concurrent
//! turns for the same user serialize on the session mutex instead of
//! racing on read-modify-write. Expiry is judged by `last_active`, which
//! the controller bumps at the end of every turn.

use async_trait::async_trait;
use sentio_core::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub type SessionHandle = Arc<Mutex<Session>>;

/// Keyed storage for conversation sessions.
///
/// Implementations must create a fresh session on first checkout and
/// must expire idle sessions; unbounded growth is not an acceptable
/// behavior for any backend.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the session for `user_id`, creating one in the initial
    /// state if none exists or the existing one has expired.
    async fn checkout(&self, user_id: &str) -> anyhow::Result<SessionHandle>;

    /// Drop every expired session, returning how many were removed.
    async fn sweep_expired(&self) -> usize;

    /// Number of live sessions.
    async fn session_count(&self) -> usize;
}

/// In-memory store: `RwLock` map of per-user mutexes with TTL expiry.
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    ttl_secs: i64,
}

impl MemorySessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl_secs: ttl_secs as i64,
        }
    }

    /// A handle is expired when nothing else holds it, its session can
    /// be inspected right now, and it has been idle past the TTL.
    ///
    /// A handle that has been checked out but not yet locked still has
    /// an outstanding clone, so the strong count guards the window
    /// between `checkout` returning and the caller taking the mutex; a
    /// locked session is mid-turn. Either way the session is in use and
    /// must not be dropped out from under its turn.
    fn is_expired(&self, handle: &SessionHandle, now: i64) -> bool {
        if Arc::strong_count(handle) > 1 {
            return false;
        }
        match handle.try_lock() {
            Ok(session) => now - session.last_active > self.ttl_secs,
            Err(_) => false,
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn checkout(&self, user_id: &str) -> anyhow::Result<SessionHandle> {
        let now = chrono::Utc::now().timestamp();

        {
            let sessions = self.sessions.read().await;
            if let Some(handle) = sessions.get(user_id) {
                if !self.is_expired(handle, now) {
                    return Ok(handle.clone());
                }
            }
        }

        let mut sessions = self.sessions.write().await;
        // Re-check under the write lock; another task may have already
        // replaced the entry.
        if let Some(handle) = sessions.get(user_id) {
            if !self.is_expired(handle, now) {
                return Ok(handle.clone());
            }
            tracing::debug!(user_id, "Replacing expired session");
        }
        let fresh: SessionHandle = Arc::new(Mutex::new(Session::new(now)));
        sessions.insert(user_id.to_string(), fresh.clone());
        Ok(fresh)
    }

    async fn sweep_expired(&self) -> usize {
        let now = chrono::Utc::now().timestamp();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| !self.is_expired(handle, now));
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::info!(removed, remaining = sessions.len(), "Swept expired sessions");
        }
        removed
    }

    async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
