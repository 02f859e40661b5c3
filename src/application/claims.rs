use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Set of fids with a drop currently in flight in this process.
///
/// Holding a [`Claim`] is what makes "check the flag, transfer, set the flag"
/// exclusive per user.
#[derive(Debug, Default, Clone)]
pub struct ClaimSet {
    in_flight: Arc<Mutex<HashSet<u64>>>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` when another invocation already holds `fid`.
    pub fn try_claim(&self, fid: u64) -> Option<Claim> {
        if self.lock().insert(fid) {
            Some(Claim {
                fid,
                set: self.clone(),
            })
        } else {
            None
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<u64>> {
        // The set stays consistent even if a holder panicked.
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Released on drop.
#[derive(Debug)]
pub struct Claim {
    fid: u64,
    set: ClaimSet,
}

impl Claim {
    pub fn fid(&self) -> u64 {
        self.fid
    }
}

impl Drop for Claim {
    fn drop(&mut self) {
        self.set.lock().remove(&self.fid);
    }
}
