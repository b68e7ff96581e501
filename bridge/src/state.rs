//! State definitions for the Hermes bridge contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:hermes-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contract configuration, immutable after instantiation.
#[cw_serde]
pub struct Config {
    /// Admin address, fixed to the deployer
    pub admin: Addr,
    /// Token ledger this bridge instance locks and mints on
    pub token_ledger: Addr,
    /// Identifier of the chain this instance is deployed on
    pub chain_id: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Single-holder attester identity: the EVM-style secp256k1 address whose
/// signatures authorize redeems. Unset until the admin assigns it;
/// overwrite-on-set with no rotation history.
pub const ATTESTER: Item<[u8; 20]> = Item::new("attester");

/// Consumed redemption keys. Entries are never removed.
/// Key: 32-byte redemption key as &[u8], Value: true once consumed
pub const REDEMPTIONS: Map<&[u8], bool> = Map::new("redemptions");
