//! Common - Shared Types for Hermes Bridge Contracts
//!
//! This package defines the token-ledger interface the bridge contract
//! invokes. The ledger contract implements a superset of these messages
//! with JSON-compatible variant names.

pub mod ledger;

pub use ledger::{LedgerExecuteMsg, LedgerQueryMsg, OwnerOfResponse};
