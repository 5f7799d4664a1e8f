//! Execute handlers for the FileBridge contract.
//!
//! - `admin` - role grants, revocations and renouncements
//! - `config` - the governed source -> wrapped token allow-list
//! - `outgoing` - deposits that wrap a listed token for another chain
//! - `redeem` - guardian-signed payouts on the destination chain

mod admin;
mod config;
mod outgoing;
mod redeem;

pub use admin::*;
pub use config::*;
pub use outgoing::*;
pub use redeem::*;
