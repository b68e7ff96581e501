//! Message types for the Hermes bridge contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

/// Instantiate message. The deployer becomes the admin.
#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the token ledger contract on this chain
    pub token_ledger: String,
    /// Identifier of this chain, baked into every attestation message
    pub chain_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Assign the single-holder attester identity (overwrites any holder).
    /// Signatures issued under a replaced attester stop verifying.
    ///
    /// Authorization: Admin only
    SetAttesterRole {
        /// EVM-style secp256k1 address as a 0x-prefixed hex string
        account: String,
    },

    /// Lock a token on the local ledger and emit a swap intent toward
    /// `dest_chain_id`. The nonce disambiguates repeated swaps of the same
    /// token and binds the swap to a single redeem.
    ///
    /// Authorization: current token owner only
    Swap {
        token_id: u64,
        dest_chain_id: u64,
        nonce: u64,
    },

    /// Verify an attestation over (token_id, owner, origin_chain_id, nonce,
    /// local chain id) and mint the token to `owner` on the local ledger.
    ///
    /// Authorization: anyone (the signature carries the authority)
    Redeem {
        token_id: u64,
        /// Owner recorded by the origin-side swap; receives the mint
        owner: String,
        origin_chain_id: u64,
        nonce: u64,
        /// 65-byte signature, r (32) || s (32) || v (1)
        signature: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the contract configuration
    #[returns(ConfigResponse)]
    Config {},
    /// Returns the configured attester address, if any
    #[returns(AttesterResponse)]
    Attester {},
    /// Returns whether a redemption key has been consumed
    #[returns(IsRedeemedResponse)]
    IsRedeemed {
        token_id: u64,
        owner: String,
        origin_chain_id: u64,
        nonce: u64,
    },
    /// Returns the canonical attestation digest for a swap tuple. Off-chain
    /// attesters can use this to check hash parity with the contract.
    #[returns(SwapDigestResponse)]
    SwapDigest {
        token_id: u64,
        owner: String,
        origin_chain_id: u64,
        nonce: u64,
        dest_chain_id: u64,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: String,
    pub token_ledger: String,
    pub chain_id: u64,
}

#[cw_serde]
pub struct AttesterResponse {
    /// 0x-prefixed hex, or None when the role was never assigned
    pub attester: Option<String>,
}

#[cw_serde]
pub struct IsRedeemedResponse {
    pub redeemed: bool,
}

#[cw_serde]
pub struct SwapDigestResponse {
    /// 0x-prefixed hex of the 32-byte digest (before personal-message
    /// prefixing)
    pub digest: String,
}
