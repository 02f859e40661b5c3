use crate::domain::ports::UserStore;
use crate::domain::user::UserRecord;
use crate::error::{DropError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing user records.
pub const CF_USERS: &str = "users";

/// A persistent user store backed by RocksDB.
///
/// Records live in the `users` column family, keyed by the big-endian fid and
/// serialized as JSON. `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBUserStore {
    db: Arc<DB>,
}

impl RocksDBUserStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_users = ColumnFamilyDescriptor::new(CF_USERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_users])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn read(&self, fid: u64) -> Result<Option<UserRecord>> {
        let cf = self
            .db
            .cf_handle(CF_USERS)
            .ok_or_else(|| DropError::Storage("Users column family not found".to_string()))?;

        match self.db.get_cf(&cf, fid.to_be_bytes())? {
            Some(bytes) => {
                let user = serde_json::from_slice(&bytes)
                    .map_err(|e| DropError::Storage(format!("Deserialization error: {}", e)))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    fn write(&self, user: &UserRecord) -> Result<()> {
        let cf = self
            .db
            .cf_handle(CF_USERS)
            .ok_or_else(|| DropError::Storage("Users column family not found".to_string()))?;

        let value = serde_json::to_vec(user)
            .map_err(|e| DropError::Storage(format!("Serialization error: {}", e)))?;
        self.db.put_cf(&cf, user.fid.to_be_bytes(), value)?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for RocksDBUserStore {
    async fn get(&self, fid: u64) -> Result<Option<UserRecord>> {
        self.read(fid)
    }

    async fn set_received_drop(&self, fid: u64, received: bool) -> Result<()> {
        let mut user = self.read(fid)?.ok_or(DropError::UserNotFound(fid))?;
        user.received_drop = received;
        self.write(&user)
    }

    async fn insert_if_absent(&self, user: UserRecord) -> Result<bool> {
        if self.read(user.fid)?.is_some() {
            return Ok(false);
        }
        self.write(&user)?;
        Ok(true)
    }
}
