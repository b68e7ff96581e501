//! Hermes Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_redeem, execute_set_attester_role, execute_swap};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{query_attester, query_config, query_is_redeemed, query_swap_digest};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token_ledger = deps.api.addr_validate(&msg.token_ledger)?;

    // The deployer is the admin; this is not transferable.
    let config = Config {
        admin: info.sender,
        token_ledger,
        chain_id: msg.chain_id,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("token_ledger", config.token_ledger)
        .add_attribute("chain_id", config.chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetAttesterRole { account } => execute_set_attester_role(deps, info, account),
        ExecuteMsg::Swap {
            token_id,
            dest_chain_id,
            nonce,
        } => execute_swap(deps, info, token_id, dest_chain_id, nonce),
        ExecuteMsg::Redeem {
            token_id,
            owner,
            origin_chain_id,
            nonce,
            signature,
        } => execute_redeem(
            deps,
            info,
            token_id,
            owner,
            origin_chain_id,
            nonce,
            signature,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Attester {} => to_json_binary(&query_attester(deps)?),
        QueryMsg::IsRedeemed {
            token_id,
            owner,
            origin_chain_id,
            nonce,
        } => to_json_binary(&query_is_redeemed(
            deps,
            token_id,
            owner,
            origin_chain_id,
            nonce,
        )?),
        QueryMsg::SwapDigest {
            token_id,
            owner,
            origin_chain_id,
            nonce,
            dest_chain_id,
        } => to_json_binary(&query_swap_digest(
            token_id,
            owner,
            origin_chain_id,
            nonce,
            dest_chain_id,
        )?),
    }
}
