//! State definitions for the token ledger.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:hermes-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A single token entry. Once `locked` is set the token can no longer be
/// transferred on this chain.
#[cw_serde]
pub struct TokenInfo {
    pub owner: Addr,
    pub locked: bool,
}

/// Admin address, fixed at instantiation to the deployer.
pub const ADMIN: Item<Addr> = Item::new("admin");

/// Single-holder minter capability. Unset until the admin assigns it.
pub const MINTER: Item<Addr> = Item::new("minter");

/// Single-holder bridge operator capability. Unset until the admin assigns it.
pub const BRIDGE_OPERATOR: Item<Addr> = Item::new("bridge_operator");

/// token_id => token info
pub const TOKENS: Map<u64, TokenInfo> = Map::new("tokens");
