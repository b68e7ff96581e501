//! Hermes Token Ledger - Per-Chain Token Ownership Registry
//!
//! Tracks token existence and ownership on a single chain. Creation and
//! forced state changes are gated behind two single-holder capabilities:
//!
//! - `minter` - may create new tokens (the bridge holds this on a
//!   destination ledger so it can materialize redeemed tokens)
//! - `bridge_operator` - may lock a token during a swap, forfeiting it
//!   on this chain
//!
//! Both capabilities are assigned by the admin (the deploying account) and
//! overwrite on set. A locked token has no unlock path.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
