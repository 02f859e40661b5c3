//! Domain types and the ports the drop handler talks through.

pub mod frame;
pub mod outcome;
pub mod ports;
pub mod signing;
pub mod transfer;
pub mod user;
