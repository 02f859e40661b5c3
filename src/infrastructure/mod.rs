//! Adapters for the external collaborators behind the domain ports.

pub mod erc20;
pub mod in_memory;
pub mod neynar;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
