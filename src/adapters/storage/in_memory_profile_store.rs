//! In-Memory Profile Store Adapter
//!
//! Keeps remembered profiles in memory. Useful for testing and development,
//! and the default when no profile directory is configured. The store is
//! bounded: once full, the oldest remembered session is forgotten.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::session::UserProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Sessions remembered by [`InMemoryProfileStore::new`].
pub const DEFAULT_PROFILE_CAPACITY: usize = 10_000;

#[derive(Debug, Default)]
struct Profiles {
    by_session: HashMap<SessionId, UserProfile>,
    /// Sessions in the order they were first saved.
    order: VecDeque<SessionId>,
}

/// In-memory storage for session profiles
#[derive(Debug, Clone)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<Profiles>>,
    capacity: usize,
}

impl InMemoryProfileStore {
    /// Create an empty store holding up to [`DEFAULT_PROFILE_CAPACITY`] sessions
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_PROFILE_CAPACITY)
    }

    /// Create an empty store holding up to `capacity` sessions (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(Profiles::default())),
            capacity: capacity.max(1),
        }
    }

    /// Get the number of remembered profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.by_session.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.by_session.is_empty()
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save(
        &self,
        session_id: SessionId,
        profile: &UserProfile,
    ) -> Result<(), ProfileStoreError> {
        let mut profiles = self.profiles.write().await;
        if profiles
            .by_session
            .insert(session_id, profile.clone())
            .is_none()
        {
            profiles.order.push_back(session_id);
        }
        while profiles.by_session.len() > self.capacity {
            let Some(oldest) = profiles.order.pop_front() else {
                break;
            };
            profiles.by_session.remove(&oldest);
            tracing::debug!(session_id = %oldest, "Forgot oldest in-memory profile");
        }
        Ok(())
    }

    async fn load(&self, session_id: SessionId) -> Result<Option<UserProfile>, ProfileStoreError> {
        Ok(self.profiles.read().await.by_session.get(&session_id).cloned())
    }

    async fn remove(&self, session_id: SessionId) -> Result<(), ProfileStoreError> {
        let mut profiles = self.profiles.write().await;
        if profiles.by_session.remove(&session_id).is_some() {
            profiles.order.retain(|id| *id != session_id);
        }
        Ok(())
    }
}
