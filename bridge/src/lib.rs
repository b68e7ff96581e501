//! Hermes Bridge Contract - Attestation-Gated Cross-Chain Token Swaps
//!
//! One instance of this contract is deployed per chain, bound to a local
//! token ledger. Tokens move between chains in two halves:
//!
//! # Outgoing Flow (Swap)
//! 1. The token owner calls `Swap` with a destination chain id and a nonce
//! 2. The bridge locks the token on the local ledger (forfeiting it here)
//!    and emits the swap intent as event attributes
//! 3. The off-chain attester observes the intent and signs the canonical
//!    message over (token_id, owner, origin_chain, nonce, dest_chain)
//!
//! # Incoming Flow (Redeem)
//! 1. The owner (or any relayer) calls `Redeem` on the destination bridge
//!    with the attester's signature
//! 2. The bridge rebuilds the canonical message, recovers the signer and
//!    checks it against the configured attester
//! 3. The redemption key is checked and marked consumed, then the token is
//!    minted to the original owner on the local ledger
//!
//! # Security
//! - Single-holder attester role, assigned by the admin
//! - Replay protection keyed on (token_id, owner, origin_chain, nonce)
//! - Consumed flag written before the mint dispatch; a failed mint reverts
//!   the flag together with the rest of the transaction

pub mod attestation;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::attestation::{keccak256, redemption_key, swap_digest};
pub use crate::error::ContractError;
