//! Outgoing swap handler.

use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, WasmMsg};

use common::ledger::{LedgerExecuteMsg, LedgerQueryMsg, OwnerOfResponse};

use crate::attestation::{bytes32_to_hex, swap_digest};
use crate::error::ContractError;
use crate::state::CONFIG;

/// Lock a token on the local ledger and emit the swap intent.
///
/// The intent attributes carry the exact tuple the attester must sign; the
/// digest attribute lets the attester cross-check its own hashing. Nothing
/// here touches or knows about the destination chain.
pub fn execute_swap(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
    dest_chain_id: u64,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let resp: OwnerOfResponse = deps.querier.query_wasm_smart(
        config.token_ledger.clone(),
        &LedgerQueryMsg::OwnerOf { token_id },
    )?;
    if info.sender.as_str() != resp.owner {
        return Err(ContractError::NotTokenOwner);
    }

    let digest = swap_digest(
        token_id,
        info.sender.as_str(),
        config.chain_id,
        nonce,
        dest_chain_id,
    );

    // The ledger enforces that this contract holds the bridge operator
    // role; a missing grant reverts the whole transaction.
    let lock_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token_ledger.to_string(),
        msg: to_json_binary(&LedgerExecuteMsg::Lock { token_id })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(lock_msg)
        .add_attribute("action", "swap")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("origin_chain_id", config.chain_id.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
        .add_attribute("digest", bytes32_to_hex(&digest)))
}
