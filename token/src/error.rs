//! Error types for the token ledger.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only minter can mint")]
    UnauthorizedMinter,

    #[error("Unauthorized: only bridge operator can lock")]
    UnauthorizedBridgeOperator,

    #[error("Caller has no rights to this token")]
    NotTokenOwner,

    #[error("Token already exists: {token_id}")]
    TokenAlreadyExists { token_id: u64 },

    #[error("Token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("Token is locked: {token_id}")]
    TokenLocked { token_id: u64 },

    #[error("Minter role not configured")]
    MinterNotSet,

    #[error("Bridge operator role not configured")]
    BridgeOperatorNotSet,
}
