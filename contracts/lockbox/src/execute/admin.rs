//! Pause control and emergency rescue.

use common::{AssetInfo, AssetKind};
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::custody::Custody;
use crate::error::ContractError;
use crate::state::CONFIG;

/// Pause bridging (owner or guardian)
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    let is_guardian = config.guardian.as_ref() == Some(&info.sender);
    if info.sender != config.owner && !is_guardian {
        return Err(ContractError::UnauthorizedPauser);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "pause")
        .add_attribute("by", info.sender))
}

/// Unpause bridging (owner only)
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "unpause")
        .add_attribute("by", info.sender))
}

/// Emergency withdrawal (sudo only, allowed while paused)
pub fn execute_rescue<C: Custody>(
    deps: DepsMut,
    info: MessageInfo,
    custody: &C,
    asset: AssetInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.sudo {
        return Err(ContractError::UnauthorizedSudo);
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    let recipient = deps.api.addr_validate(&recipient)?;

    let msgs = match asset.classify(&config.asset) {
        AssetKind::Bridged => custody.rescue(deps.storage, &config, recipient.as_str(), amount)?,
        AssetKind::Foreign(other) => vec![other.transfer_msg(recipient.as_str(), amount)?],
    };

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("method", "rescue")
        .add_attribute("asset", asset.key())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}
