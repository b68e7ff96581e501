//! Query handlers for the Hermes bridge contract.

use cosmwasm_std::{Deps, StdResult};

use crate::attestation::{address_to_hex, bytes32_to_hex, redemption_key, swap_digest};
use crate::msg::{AttesterResponse, ConfigResponse, IsRedeemedResponse, SwapDigestResponse};
use crate::state::{ATTESTER, CONFIG, REDEMPTIONS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin.to_string(),
        token_ledger: config.token_ledger.to_string(),
        chain_id: config.chain_id,
    })
}

pub fn query_attester(deps: Deps) -> StdResult<AttesterResponse> {
    let attester = ATTESTER.may_load(deps.storage)?;
    Ok(AttesterResponse {
        attester: attester.map(|a| address_to_hex(&a)),
    })
}

pub fn query_is_redeemed(
    deps: Deps,
    token_id: u64,
    owner: String,
    origin_chain_id: u64,
    nonce: u64,
) -> StdResult<IsRedeemedResponse> {
    let key = redemption_key(token_id, &owner, origin_chain_id, nonce);
    let redeemed = REDEMPTIONS
        .may_load(deps.storage, &key)?
        .unwrap_or(false);
    Ok(IsRedeemedResponse { redeemed })
}

/// Hash-parity helper for off-chain attesters; pure computation, no state.
pub fn query_swap_digest(
    token_id: u64,
    owner: String,
    origin_chain_id: u64,
    nonce: u64,
    dest_chain_id: u64,
) -> StdResult<SwapDigestResponse> {
    let digest = swap_digest(token_id, &owner, origin_chain_id, nonce, dest_chain_id);
    Ok(SwapDigestResponse {
        digest: bytes32_to_hex(&digest),
    })
}
