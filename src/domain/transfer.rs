use super::signing::SigningKey;
use super::user::WalletAddress;
use crate::error::DropError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole tokens paid out per drop.
pub const DROP_TOKENS: u32 = 100;

/// A positive token amount expressed in whole tokens.
///
/// Wraps `rust_decimal::Decimal` so the conversion into on-chain base units is
/// exact and overflow is reported instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TokenAmount(Decimal);

impl TokenAmount {
    pub fn new(value: Decimal) -> Result<Self, DropError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(DropError::Validation(
                "Token amount must be positive".to_string(),
            ))
        }
    }

    /// The fixed amount every eligible user receives.
    pub fn drop_amount() -> Self {
        Self(Decimal::from(DROP_TOKENS))
    }

    /// Scales the amount by `10^decimals`, like parsing an ether-style unit string.
    pub fn to_base_units(&self, decimals: u32) -> Result<u128, DropError> {
        let factor = 10u64
            .checked_pow(decimals)
            .ok_or_else(|| DropError::Validation(format!("{decimals} decimals is out of range")))?;

        let scaled = self
            .0
            .checked_mul(Decimal::from(factor))
            .ok_or_else(|| DropError::Validation(format!("{} overflows base units", self.0)))?;

        if !scaled.fract().is_zero() {
            return Err(DropError::Validation(format!(
                "{} has more than {decimals} decimals",
                self.0
            )));
        }

        scaled
            .to_u128()
            .ok_or_else(|| DropError::Validation(format!("{} overflows base units", self.0)))
    }
}

impl TryFrom<Decimal> for TokenAmount {
    type Error = DropError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A token transfer waiting to be simulated. Built fresh for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub to: WalletAddress,
    pub amount: TokenAmount,
}

impl TransferRequest {
    pub fn drop_to(to: WalletAddress) -> Self {
        Self {
            to,
            amount: TokenAmount::drop_amount(),
        }
    }
}

/// A transfer the ledger accepted in simulation, ready to be submitted.
#[derive(Debug, Clone)]
pub struct SimulatedTransfer {
    pub transfer: TransferRequest,
    /// Address the simulation ran from.
    pub from: WalletAddress,
    pub signing_key: SigningKey,
}

/// Hash of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
