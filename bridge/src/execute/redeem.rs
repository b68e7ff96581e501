//! Incoming redeem handler.

use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, WasmMsg};

use common::ledger::LedgerExecuteMsg;

use crate::attestation::{bytes32_to_hex, recover_signer, redemption_key, swap_digest};
use crate::error::ContractError;
use crate::state::{ATTESTER, CONFIG, REDEMPTIONS};

/// Verify an attestation and mint the token to its original owner.
///
/// The canonical message is rebuilt with the local chain id in the
/// destination slot, so a signature produced for another destination does
/// not verify here. The consumed flag is written before the mint message is
/// dispatched; if the mint fails (e.g. the bridge lacks the minter role on
/// the ledger) the host reverts the flag along with everything else.
pub fn execute_redeem(
    deps: DepsMut,
    _info: MessageInfo,
    token_id: u64,
    owner: String,
    origin_chain_id: u64,
    nonce: u64,
    signature: cosmwasm_std::Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let attester = ATTESTER
        .may_load(deps.storage)?
        .ok_or(ContractError::AttesterNotSet)?;

    let owner_addr = deps.api.addr_validate(&owner)?;

    let digest = swap_digest(
        token_id,
        owner_addr.as_str(),
        origin_chain_id,
        nonce,
        config.chain_id,
    );
    let signer = recover_signer(deps.api, &digest, signature.as_slice())?;
    if signer != attester {
        return Err(ContractError::InvalidSignature);
    }

    let key = redemption_key(token_id, owner_addr.as_str(), origin_chain_id, nonce);
    if REDEMPTIONS.may_load(deps.storage, &key)?.unwrap_or(false) {
        return Err(ContractError::AlreadyRedeemed);
    }
    REDEMPTIONS.save(deps.storage, &key, &true)?;

    // Requires the minter role on the local ledger.
    let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token_ledger.to_string(),
        msg: to_json_binary(&LedgerExecuteMsg::Mint {
            to: owner_addr.to_string(),
            token_id,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("action", "redeem")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", owner_addr)
        .add_attribute("origin_chain_id", origin_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("redemption_key", bytes32_to_hex(&key)))
}
