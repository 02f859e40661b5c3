use crate::error::DropError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An EVM wallet address: `0x` followed by 40 hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for WalletAddress {
    type Err = DropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| DropError::Validation(format!("wallet {s:?} must start with 0x")))?;

        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DropError::Validation(format!(
                "wallet {s:?} must have 40 hex digits"
            )));
        }

        Ok(Self(format!("0x{hex}")))
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = DropError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user known to the drop, keyed by Farcaster id.
///
/// The record is owned by the data layer; the handler only ever flips
/// `received_drop` from `false` to `true`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UserRecord {
    /// Farcaster id of the user.
    pub fid: u64,
    /// Destination of the drop.
    pub wallet: WalletAddress,
    /// Set once the drop has been submitted on-chain.
    #[serde(rename = "recievedrop", alias = "received_drop")]
    pub received_drop: bool,
    /// Points balance. Read alongside the record, not used to size the drop.
    #[serde(default)]
    pub points: u64,
}

impl UserRecord {
    pub fn new(fid: u64, wallet: WalletAddress) -> Self {
        Self {
            fid,
            wallet,
            received_drop: false,
            points: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_address_parsing() {
        let wallet: WalletAddress = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb".parse().unwrap();
        assert_eq!(wallet.as_str(), "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb");

        assert!("742d35Cc6634C0532925a3b844Bc9e7595f0bEbb".parse::<WalletAddress>().is_err());
        assert!("0x1234".parse::<WalletAddress>().is_err());
        assert!("0xZZ2d35Cc6634C0532925a3b844Bc9e7595f0bEbb".parse::<WalletAddress>().is_err());
    }

    #[test]
    fn test_user_record_accepts_both_flag_spellings() {
        let legacy = r#"{"fid":7,"wallet":"0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb","recievedrop":true,"points":12}"#;
        let user: UserRecord = serde_json::from_str(legacy).unwrap();
        assert!(user.received_drop);
        assert_eq!(user.points, 12);

        let modern = r#"{"fid":7,"wallet":"0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb","received_drop":false}"#;
        let user: UserRecord = serde_json::from_str(modern).unwrap();
        assert!(!user.received_drop);
        assert_eq!(user.points, 0);

        let out = serde_json::to_value(&user).unwrap();
        assert_eq!(out["recievedrop"], false);
    }

    #[test]
    fn test_user_record_rejects_bad_wallet() {
        let bad = r#"{"fid":7,"wallet":"nope","recievedrop":false}"#;
        assert!(serde_json::from_str::<UserRecord>(bad).is_err());
    }
}
