//! Message types for the token ledger.
//!
//! `Mint`, `Lock` and `OwnerOf` are JSON-compatible with the interface
//! subset in `common::ledger`, which is what the bridge contract speaks.

use cosmwasm_schema::{cw_serde, QueryResponses};

pub use common::ledger::OwnerOfResponse;

/// Instantiate message. The deployer becomes the admin; both capability
/// slots start unset.
#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Create a new token owned by `to`.
    ///
    /// Authorization: minter only
    Mint { to: String, token_id: u64 },

    /// Transfer an unlocked token to another account.
    ///
    /// Authorization: current owner only
    Transfer { to: String, token_id: u64 },

    /// Permanently lock a token, forfeiting it on this chain.
    ///
    /// Authorization: bridge operator only
    Lock { token_id: u64 },

    /// Assign the single-holder minter capability (overwrites any holder).
    ///
    /// Authorization: Admin only
    SetMinterRole { account: String },

    /// Assign the single-holder bridge operator capability (overwrites any
    /// holder).
    ///
    /// Authorization: Admin only
    SetBridgeOperatorRole { account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the current owner of a token
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Returns whether a token has been locked by the bridge
    #[returns(IsLockedResponse)]
    IsLocked { token_id: u64 },
    /// Returns the minter, if assigned
    #[returns(MinterResponse)]
    Minter {},
    /// Returns the bridge operator, if assigned
    #[returns(BridgeOperatorResponse)]
    BridgeOperator {},
    /// Returns the admin address
    #[returns(AdminResponse)]
    Admin {},
    /// Returns a page of tokens ordered by id
    #[returns(TokensResponse)]
    Tokens {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct IsLockedResponse {
    pub locked: bool,
}

#[cw_serde]
pub struct MinterResponse {
    pub minter: Option<String>,
}

#[cw_serde]
pub struct BridgeOperatorResponse {
    pub bridge_operator: Option<String>,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: String,
}

#[cw_serde]
pub struct TokenEntry {
    pub token_id: u64,
    pub owner: String,
    pub locked: bool,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<TokenEntry>,
}
