use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    AdminResponse, BridgeOperatorResponse, ExecuteMsg, InstantiateMsg, IsLockedResponse,
    MinterResponse, OwnerOfResponse, QueryMsg, TokenEntry, TokensResponse,
};
use crate::state::{TokenInfo, ADMIN, BRIDGE_OPERATOR, CONTRACT_NAME, CONTRACT_VERSION, MINTER, TOKENS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // The deployer is the admin; this is not transferable.
    ADMIN.save(deps.storage, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { to, token_id } => execute_mint(deps, info, to, token_id),
        ExecuteMsg::Transfer { to, token_id } => execute_transfer(deps, info, to, token_id),
        ExecuteMsg::Lock { token_id } => execute_lock(deps, info, token_id),
        ExecuteMsg::SetMinterRole { account } => execute_set_minter_role(deps, info, account),
        ExecuteMsg::SetBridgeOperatorRole { account } => {
            execute_set_bridge_operator_role(deps, info, account)
        }
    }
}

/// Create a new token. Only the configured minter may call this.
fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    let minter = MINTER
        .may_load(deps.storage)?
        .ok_or(ContractError::MinterNotSet)?;
    if info.sender != minter {
        return Err(ContractError::UnauthorizedMinter);
    }

    if TOKENS.may_load(deps.storage, token_id)?.is_some() {
        return Err(ContractError::TokenAlreadyExists { token_id });
    }

    let owner = deps.api.addr_validate(&to)?;
    let token = TokenInfo {
        owner: owner.clone(),
        locked: false,
    };
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", owner))
}

/// Standard ownership transfer. Locked tokens cannot move.
fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    let mut token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;

    if info.sender != token.owner {
        return Err(ContractError::NotTokenOwner);
    }
    if token.locked {
        return Err(ContractError::TokenLocked { token_id });
    }

    let new_owner = deps.api.addr_validate(&to)?;
    token.owner = new_owner.clone();
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("from", info.sender)
        .add_attribute("to", new_owner))
}

/// Forfeit a token during a swap. Only the bridge operator may call this,
/// and there is no unlock path.
fn execute_lock(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    let operator = BRIDGE_OPERATOR
        .may_load(deps.storage)?
        .ok_or(ContractError::BridgeOperatorNotSet)?;
    if info.sender != operator {
        return Err(ContractError::UnauthorizedBridgeOperator);
    }

    let mut token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    if token.locked {
        return Err(ContractError::TokenLocked { token_id });
    }

    token.locked = true;
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new()
        .add_attribute("action", "lock")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", token.owner))
}

fn execute_set_minter_role(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    let minter = deps.api.addr_validate(&account)?;
    MINTER.save(deps.storage, &minter)?;

    Ok(Response::new()
        .add_attribute("action", "set_minter_role")
        .add_attribute("minter", minter))
}

fn execute_set_bridge_operator_role(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    let operator = deps.api.addr_validate(&account)?;
    BRIDGE_OPERATOR.save(deps.storage, &operator)?;

    Ok(Response::new()
        .add_attribute("action", "set_bridge_operator_role")
        .add_attribute("bridge_operator", operator))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::IsLocked { token_id } => to_json_binary(&query_is_locked(deps, token_id)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
        QueryMsg::BridgeOperator {} => to_json_binary(&query_bridge_operator(deps)?),
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::Tokens { start_after, limit } => {
            to_json_binary(&query_tokens(deps, start_after, limit)?)
        }
    }
}

fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<OwnerOfResponse> {
    let token = TOKENS.load(deps.storage, token_id)?;
    Ok(OwnerOfResponse {
        owner: token.owner.to_string(),
    })
}

fn query_is_locked(deps: Deps, token_id: u64) -> StdResult<IsLockedResponse> {
    let token = TOKENS.load(deps.storage, token_id)?;
    Ok(IsLockedResponse {
        locked: token.locked,
    })
}

fn query_minter(deps: Deps) -> StdResult<MinterResponse> {
    let minter = MINTER.may_load(deps.storage)?;
    Ok(MinterResponse {
        minter: minter.map(|a| a.to_string()),
    })
}

fn query_bridge_operator(deps: Deps) -> StdResult<BridgeOperatorResponse> {
    let operator = BRIDGE_OPERATOR.may_load(deps.storage)?;
    Ok(BridgeOperatorResponse {
        bridge_operator: operator.map(|a| a.to_string()),
    })
}

fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let admin = ADMIN.load(deps.storage)?;
    Ok(AdminResponse {
        admin: admin.to_string(),
    })
}

fn query_tokens(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens: Vec<TokenEntry> = TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (token_id, token) = item?;
            Ok(TokenEntry {
                token_id,
                owner: token.owner.to_string(),
                locked: token.locked,
            })
        })
        .collect::<StdResult<_>>()?;

    Ok(TokensResponse { tokens })
}
