//! Token-ledger interface messages.
//!
//! The bridge only needs three things from a ledger: who owns a token,
//! a privileged mint, and a privileged lock. Any contract answering these
//! messages can back a bridge instance.

use cosmwasm_schema::cw_serde;

/// Execute messages the bridge sends to its token ledger.
#[cw_serde]
pub enum LedgerExecuteMsg {
    /// Create a token owned by `to`. Caller must hold the minter role.
    Mint { to: String, token_id: u64 },
    /// Permanently lock a token. Caller must hold the bridge operator role.
    Lock { token_id: u64 },
}

/// Query messages the bridge sends to its token ledger.
#[cw_serde]
pub enum LedgerQueryMsg {
    /// Returns the current owner of `token_id`.
    OwnerOf { token_id: u64 },
}

/// Response to [`LedgerQueryMsg::OwnerOf`].
#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}
