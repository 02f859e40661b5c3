use crate::domain::outcome::{DEFAULT_IMAGE_BASE_URL, ImageSet};
use crate::domain::signing::SigningKey;
use crate::infrastructure::neynar::DEFAULT_NEYNAR_URL;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Base mainnet.
pub const DEFAULT_CHAIN_ID: u64 = 8453;

/// Process configuration. Every option can also come from the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Farcaster frame token drop", long_about = None)]
pub struct Config {
    /// Private key the drop is signed with. Without it every request renders the error frame.
    #[arg(long, env = "MINTER_PRIVATE_KEY", hide_env_values = true)]
    pub minter_private_key: Option<String>,

    /// Neynar API key used to validate frame messages.
    #[arg(long, env = "NEYNAR_API_KEY", hide_env_values = true)]
    pub neynar_api_key: String,

    #[arg(long, env = "NEYNAR_URL", default_value = DEFAULT_NEYNAR_URL)]
    pub neynar_url: String,

    /// JSON-RPC endpoint of the chain the token lives on.
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: String,

    /// ERC-20 contract paying out the drop.
    #[arg(long, env = "CONTRACT_ADDRESS")]
    pub contract_address: String,

    #[arg(long, env = "CHAIN_ID", default_value_t = DEFAULT_CHAIN_ID)]
    pub chain_id: u64,

    /// Public origin of this service, used for the frame post URL.
    #[arg(long, env = "SITE_URL")]
    pub site_url: String,

    /// Folder holding claimed.jpg, error.png and no-address.png.
    #[arg(long, env = "IMAGE_BASE_URL", default_value = DEFAULT_IMAGE_BASE_URL)]
    pub image_base_url: String,

    #[arg(long = "listen", env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen: SocketAddr,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// CSV file of users to load at startup.
    #[arg(long, env = "USERS_CSV")]
    pub users: Option<PathBuf>,
}

impl Config {
    pub fn signing_key(&self) -> Option<SigningKey> {
        self.minter_private_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(SigningKey::new)
    }

    pub fn images(&self) -> ImageSet {
        ImageSet::from_base(&self.image_base_url)
    }
}
