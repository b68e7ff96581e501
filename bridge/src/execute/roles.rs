//! Attester role assignment.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::attestation::{address_to_hex, parse_address};
use crate::error::ContractError;
use crate::state::{ATTESTER, CONFIG};

/// Assign the attester identity. Overwrites any previous holder; signatures
/// issued under the old attester become unverifiable immediately.
pub fn execute_set_attester_role(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let attester = parse_address(&account)?;
    if attester == [0u8; 20] {
        return Err(ContractError::InvalidAddress {
            reason: "attester address cannot be zero".to_string(),
        });
    }
    ATTESTER.save(deps.storage, &attester)?;

    Ok(Response::new()
        .add_attribute("action", "set_attester_role")
        .add_attribute("attester", address_to_hex(&attester)))
}
