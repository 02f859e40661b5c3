use super::frame::Verification;
use super::signing::SigningKey;
use super::transfer::{SimulatedTransfer, TransferRequest, TxHash};
use super::user::UserRecord;
use crate::error::{Result, VerifyError};
use async_trait::async_trait;

/// Checks that a frame message was really signed by the interactor.
#[async_trait]
pub trait FrameVerifier: Send + Sync {
    async fn verify(&self, message_bytes_hex: &str) -> std::result::Result<Verification, VerifyError>;
}

/// Access to user records owned by the data layer.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get(&self, fid: u64) -> Result<Option<UserRecord>>;
    /// Fails with `UserNotFound` when there is no record for `fid`.
    async fn set_received_drop(&self, fid: u64, received: bool) -> Result<()>;
    /// Inserts `user` unless a record for its fid already exists.
    ///
    /// Returns whether the record was inserted. Existing records, and their
    /// drop flag, are never overwritten.
    async fn insert_if_absent(&self, user: UserRecord) -> Result<bool>;
}

/// The chain the drop is paid out on.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// `Ok(None)` means the node produced no executable request.
    async fn simulate(
        &self,
        transfer: &TransferRequest,
        signing_key: &SigningKey,
    ) -> Result<Option<SimulatedTransfer>>;

    async fn submit(&self, simulated: SimulatedTransfer) -> Result<Option<TxHash>>;
}

pub type FrameVerifierBox = Box<dyn FrameVerifier>;
pub type UserStoreBox = Box<dyn UserStore>;
pub type LedgerBox = Box<dyn Ledger>;
