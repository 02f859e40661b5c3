//! Application layer orchestrating a drop.
//!
//! `DropHandler` is the single entry point. It owns its collaborators through
//! the domain ports and serialises drops per user with a `ClaimSet`.

pub mod claims;
pub mod handler;
