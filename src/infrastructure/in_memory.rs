use crate::domain::ports::UserStore;
use crate::domain::user::UserRecord;
use crate::error::{DropError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for user records.
///
/// Uses `Arc<RwLock<HashMap<u64, UserRecord>>>` so clones share the same data.
/// Used when no database path is configured, and in tests.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<u64, UserRecord>>>,
}

impl InMemoryUserStore {
    /// Creates a new, empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, fid: u64) -> Result<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.get(&fid).cloned())
    }

    async fn set_received_drop(&self, fid: u64, received: bool) -> Result<()> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&fid).ok_or(DropError::UserNotFound(fid))?;
        user.received_drop = received;
        Ok(())
    }

    async fn insert_if_absent(&self, user: UserRecord) -> Result<bool> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.fid) {
            return Ok(false);
        }
        users.insert(user.fid, user);
        Ok(true)
    }
}
