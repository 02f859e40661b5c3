use crate::domain::ports::Ledger;
use crate::domain::signing::SigningKey;
use crate::domain::transfer::{SimulatedTransfer, TransferRequest, TxHash};
use crate::domain::user::WalletAddress;
use crate::error::{DropError, Result};
use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use async_trait::async_trait;

/// Decimals of the dropped token.
pub const TOKEN_DECIMALS: u32 = 18;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// Pays the drop out of an ERC-20 contract over JSON-RPC.
#[derive(Debug, Clone)]
pub struct Erc20Ledger {
    rpc_url: String,
    contract: Address,
    chain_id: u64,
}

impl Erc20Ledger {
    pub fn new(rpc_url: impl Into<String>, contract: &str, chain_id: u64) -> Result<Self> {
        let contract = contract
            .parse::<Address>()
            .map_err(|e| DropError::Config(format!("invalid contract address {contract:?}: {e}")))?;

        Ok(Self {
            rpc_url: rpc_url.into(),
            contract,
            chain_id,
        })
    }

    fn signer(key: &SigningKey) -> std::result::Result<PrivateKeySigner, String> {
        key.expose()
            .parse::<PrivateKeySigner>()
            .map_err(|e| format!("invalid signing key: {e}"))
    }

    fn call_args(transfer: &TransferRequest) -> std::result::Result<(Address, U256), String> {
        let to = transfer
            .to
            .as_str()
            .parse::<Address>()
            .map_err(|e| format!("invalid destination {}: {e}", transfer.to))?;
        let amount = transfer
            .amount
            .to_base_units(TOKEN_DECIMALS)
            .map_err(|e| e.to_string())?;
        Ok((to, U256::from(amount)))
    }

    async fn check_chain<P: Provider>(&self, provider: &P) -> std::result::Result<(), String> {
        let chain_id = provider.get_chain_id().await.map_err(|e| e.to_string())?;
        if chain_id != self.chain_id {
            return Err(format!(
                "RPC serves chain {chain_id}, expected {}",
                self.chain_id
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Ledger for Erc20Ledger {
    async fn simulate(
        &self,
        transfer: &TransferRequest,
        signing_key: &SigningKey,
    ) -> Result<Option<SimulatedTransfer>> {
        let signer = Self::signer(signing_key).map_err(DropError::Simulation)?;
        let (to, amount) = Self::call_args(transfer).map_err(DropError::Simulation)?;

        let provider = ProviderBuilder::new()
            .connect(&self.rpc_url)
            .await
            .map_err(|e| DropError::Simulation(e.to_string()))?;
        self.check_chain(&provider)
            .await
            .map_err(DropError::Simulation)?;

        let token = IERC20::new(self.contract, &provider);
        let accepted = token
            .transfer(to, amount)
            .from(signer.address())
            .call()
            .await
            .map_err(|e| DropError::Simulation(e.to_string()))?;

        if !accepted {
            return Ok(None);
        }

        let from: WalletAddress = signer.address().to_string().parse()?;
        Ok(Some(SimulatedTransfer {
            transfer: transfer.clone(),
            from,
            signing_key: signing_key.clone(),
        }))
    }

    async fn submit(&self, simulated: SimulatedTransfer) -> Result<Option<TxHash>> {
        let signer = Self::signer(&simulated.signing_key).map_err(DropError::Submission)?;
        let (to, amount) = Self::call_args(&simulated.transfer).map_err(DropError::Submission)?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(&self.rpc_url)
            .await
            .map_err(|e| DropError::Submission(e.to_string()))?;

        let token = IERC20::new(self.contract, &provider);
        let pending = token
            .transfer(to, amount)
            .send()
            .await
            .map_err(|e| DropError::Submission(e.to_string()))?;

        Ok(Some(TxHash(pending.tx_hash().to_string())))
    }
}
