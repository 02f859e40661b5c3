#![allow(dead_code)]

use async_trait::async_trait;
use frame_drop::application::handler::DropHandler;
use frame_drop::domain::frame::{Interactor, Verification};
use frame_drop::domain::ports::{FrameVerifier, Ledger, UserStore};
use frame_drop::domain::signing::SigningKey;
use frame_drop::domain::transfer::{SimulatedTransfer, TransferRequest, TxHash};
use frame_drop::domain::user::{UserRecord, WalletAddress};
use frame_drop::error::{DropError, Result, VerifyError};
use frame_drop::infrastructure::in_memory::InMemoryUserStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb";
pub const VERIFIED: &str = "0x20c0000000000000000000000000000000000001";
pub const MINTER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

pub fn wallet() -> WalletAddress {
    WALLET.parse().unwrap()
}

/// Verifier that answers every message with the same result.
#[derive(Clone)]
pub struct ScriptedVerifier {
    result: std::result::Result<Verification, VerifyError>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedVerifier {
    pub fn answering(result: std::result::Result<Verification, VerifyError>) -> Self {
        Self {
            result,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A valid message from `fid` with the given verified addresses.
    pub fn interactor(fid: u64, verifications: &[&str]) -> Self {
        Self::answering(Ok(Verification::valid(Interactor {
            fid,
            verifications: verifications.iter().map(|a| a.to_string()).collect(),
        })))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FrameVerifier for ScriptedVerifier {
    async fn verify(&self, _message_bytes_hex: &str) -> std::result::Result<Verification, VerifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LedgerMode {
    #[default]
    Succeed,
    FailSimulation,
    EmptySimulation,
    FailSubmission,
    NoHash,
}

/// Ledger fake that records every call.
#[derive(Clone, Default)]
pub struct CountingLedger {
    mode: LedgerMode,
    delay: Option<Duration>,
    simulations: Arc<AtomicUsize>,
    submissions: Arc<AtomicUsize>,
    transfers: Arc<Mutex<Vec<TransferRequest>>>,
}

impl CountingLedger {
    pub fn new(mode: LedgerMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Simulation takes `delay`, widening the window for concurrent requests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn simulations(&self) -> usize {
        self.simulations.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    pub fn simulated_transfers(&self) -> Vec<TransferRequest> {
        self.transfers.lock().unwrap().clone()
    }
}

#[async_trait]
impl Ledger for CountingLedger {
    async fn simulate(
        &self,
        transfer: &TransferRequest,
        signing_key: &SigningKey,
    ) -> Result<Option<SimulatedTransfer>> {
        self.simulations.fetch_add(1, Ordering::SeqCst);
        self.transfers.lock().unwrap().push(transfer.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.mode {
            LedgerMode::FailSimulation => Err(DropError::Simulation("execution reverted".into())),
            LedgerMode::EmptySimulation => Ok(None),
            _ => Ok(Some(SimulatedTransfer {
                transfer: transfer.clone(),
                from: MINTER.parse().unwrap(),
                signing_key: signing_key.clone(),
            })),
        }
    }

    async fn submit(&self, _simulated: SimulatedTransfer) -> Result<Option<TxHash>> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            LedgerMode::FailSubmission => Err(DropError::Submission("nonce too low".into())),
            LedgerMode::NoHash => Ok(None),
            _ => Ok(Some(TxHash(format!("0x{:064x}", self.submissions())))),
        }
    }
}

/// Store that reads fine but refuses every write.
#[derive(Clone, Default)]
pub struct ReadOnlyUserStore {
    inner: InMemoryUserStore,
}

impl ReadOnlyUserStore {
    pub async fn with_user(user: UserRecord) -> Self {
        let inner = InMemoryUserStore::new();
        inner.insert_if_absent(user).await.unwrap();
        Self { inner }
    }
}

#[async_trait]
impl UserStore for ReadOnlyUserStore {
    async fn get(&self, fid: u64) -> Result<Option<UserRecord>> {
        self.inner.get(fid).await
    }

    async fn set_received_drop(&self, _fid: u64, _received: bool) -> Result<()> {
        Err(DropError::Storage("read-only replica".into()))
    }

    async fn insert_if_absent(&self, _user: UserRecord) -> Result<bool> {
        Err(DropError::Storage("read-only replica".into()))
    }
}

/// In-memory store holding one user per `(fid, received_drop)` pair.
pub async fn store_with(users: &[(u64, bool)]) -> InMemoryUserStore {
    let store = InMemoryUserStore::new();
    for &(fid, received_drop) in users {
        let mut user = UserRecord::new(fid, wallet());
        user.received_drop = received_drop;
        store.insert_if_absent(user).await.unwrap();
    }
    store
}

pub fn handler(
    verifier: ScriptedVerifier,
    users: impl UserStore + 'static,
    ledger: CountingLedger,
) -> DropHandler {
    DropHandler::new(
        Box::new(verifier),
        Box::new(users),
        Box::new(ledger),
        Some(SigningKey::new("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")),
    )
}

/// Store whose lookups take `delay`, widening the window between concurrent reads.
#[derive(Clone)]
pub struct SlowUserStore {
    inner: InMemoryUserStore,
    delay: Duration,
}

impl SlowUserStore {
    pub fn new(inner: InMemoryUserStore, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl UserStore for SlowUserStore {
    async fn get(&self, fid: u64) -> Result<Option<UserRecord>> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(fid).await
    }

    async fn set_received_drop(&self, fid: u64, received: bool) -> Result<()> {
        self.inner.set_received_drop(fid, received).await
    }

    async fn insert_if_absent(&self, user: UserRecord) -> Result<bool> {
        self.inner.insert_if_absent(user).await
    }
}

/// CSV with one unpaid row per fid, as an operator would pass to `--users`.
pub fn users_csv(fids: &[u64]) -> String {
    let mut csv = String::from("fid, wallet, recievedrop, points\n");
    for fid in fids {
        csv.push_str(&format!("{fid}, {WALLET}, false, 0\n"));
    }
    csv
}
