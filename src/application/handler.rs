use super::claims::ClaimSet;
use crate::domain::frame::FrameRequest;
use crate::domain::outcome::Outcome;
use crate::domain::ports::{FrameVerifierBox, LedgerBox, UserStoreBox};
use crate::domain::signing::SigningKey;
use crate::domain::transfer::TransferRequest;
use crate::error::{DropError, Result};
use tracing::{error, info, warn};

/// Handles one frame interaction: verify, look the user up, pay out once.
///
/// All collaborators are injected at construction and only read afterwards,
/// so a single handler can serve concurrent requests.
pub struct DropHandler {
    verifier: FrameVerifierBox,
    users: UserStoreBox,
    ledger: LedgerBox,
    signing_key: Option<SigningKey>,
    claims: ClaimSet,
}

impl DropHandler {
    /// Creates a new `DropHandler`.
    ///
    /// # Arguments
    ///
    /// * `verifier` - Validates the signed frame message.
    /// * `users` - Store holding the per-user drop flag.
    /// * `ledger` - Simulates and submits the token transfer.
    /// * `signing_key` - Minter credential. Without it every request fails.
    pub fn new(
        verifier: FrameVerifierBox,
        users: UserStoreBox,
        ledger: LedgerBox,
        signing_key: Option<SigningKey>,
    ) -> Self {
        Self {
            verifier,
            users,
            ledger,
            signing_key,
            claims: ClaimSet::new(),
        }
    }

    /// Runs the drop pipeline and maps every failure to [`Outcome::Error`].
    pub async fn handle(&self, request: FrameRequest) -> Outcome {
        match self.try_handle(request).await {
            Ok(outcome) => outcome,
            Err(DropError::UserNotFound(fid)) => {
                warn!(fid, "user not found");
                Outcome::Error
            }
            Err(e @ DropError::Verification(_)) | Err(e @ DropError::InvalidFrame) => {
                error!(error = %e, "frame verification failed");
                Outcome::Error
            }
            Err(e @ DropError::Simulation(_)) => {
                error!(error = %e, "transfer simulation failed");
                Outcome::Error
            }
            Err(e @ DropError::Submission(_)) => {
                error!(error = %e, "transfer submission failed");
                Outcome::Error
            }
            Err(e) => {
                error!(error = %e, "drop failed");
                Outcome::Error
            }
        }
    }

    /// Runs the drop pipeline, surfacing the internal failure kind.
    pub async fn try_handle(&self, request: FrameRequest) -> Result<Outcome> {
        let signing_key = self
            .signing_key
            .as_ref()
            .ok_or(DropError::MissingSigningKey)?;

        let message = request.message_bytes().ok_or(DropError::InvalidFrame)?;
        let verification = self.verifier.verify(message).await?;
        if !verification.valid {
            return Err(DropError::InvalidFrame);
        }
        let Some(interactor) = verification
            .interactor
            .filter(|interactor| interactor.primary_address().is_some())
        else {
            return Ok(Outcome::NoAddress);
        };

        let fid = interactor.fid;

        let user = self
            .users
            .get(fid)
            .await?
            .ok_or(DropError::UserNotFound(fid))?;
        if user.received_drop {
            return Ok(Outcome::AlreadyMinted);
        }

        // Held until this invocation returns. The flag is read again under the
        // claim so a drop finished in between is not paid twice.
        let Some(_claim) = self.claims.try_claim(fid) else {
            info!(fid, "drop already in flight");
            return Ok(Outcome::AlreadyMinted);
        };

        let user = self
            .users
            .get(fid)
            .await?
            .ok_or(DropError::UserNotFound(fid))?;
        if user.received_drop {
            return Ok(Outcome::AlreadyMinted);
        }

        let transfer = TransferRequest::drop_to(user.wallet);

        let simulated = self
            .ledger
            .simulate(&transfer, signing_key)
            .await?
            .ok_or_else(|| DropError::Simulation("empty simulated request".to_string()))?;

        let hash = self
            .ledger
            .submit(simulated)
            .await?
            .ok_or_else(|| DropError::Submission("no transaction hash returned".to_string()))?;

        if let Err(e) = self.users.set_received_drop(fid, true).await {
            // The tokens are on their way; only the bookkeeping is missing.
            error!(fid, tx = %hash, error = %e, "drop submitted but flag not persisted");
        } else {
            info!(fid, tx = %hash, amount = %transfer.amount, "drop submitted");
        }

        Ok(Outcome::Success)
    }
}
