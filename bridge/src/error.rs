//! Error types for the Hermes bridge contract.
//!
//! Messages are stable strings; clients match on them for programmatic
//! handling.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Caller has no rights to this token")]
    NotTokenOwner,

    #[error("Signature is wrong")]
    InvalidSignature,

    #[error("Already redeemed")]
    AlreadyRedeemed,

    #[error("Attester role not configured")]
    AttesterNotSet,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },
}
