use common::{AssetInfo, AssetKind};
use cosmwasm_std::{DepsMut, MessageInfo, Response, Storage};
use lockbox::state::CONFIG;

use crate::error::ContractError;
use crate::state::{HARVESTERS, REWARD_BRIDGES, REWARD_RECEIVERS, REWARD_TOKENS};

fn assert_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != CONFIG.load(storage)?.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn execute_set_reward_receiver(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    receiver: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info)?;

    if receiver.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "receiver must not be empty".to_string(),
        });
    }
    REWARD_RECEIVERS.save(deps.storage, chain_id, &receiver)?;

    Ok(Response::new()
        .add_attribute("method", "set_reward_receiver")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("receiver", receiver))
}

pub fn execute_set_harvester(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info)?;

    let address = deps.api.addr_validate(&address)?;
    if authorized {
        HARVESTERS.save(deps.storage, &address, &true)?;
    } else {
        HARVESTERS.remove(deps.storage, &address);
    }

    Ok(Response::new()
        .add_attribute("method", "set_harvester")
        .add_attribute("address", address)
        .add_attribute("authorized", authorized.to_string()))
}

pub fn execute_set_reward_token(
    deps: DepsMut,
    info: MessageInfo,
    token: AssetInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info)?;

    let config = CONFIG.load(deps.storage)?;
    if token.classify(&config.asset) == AssetKind::Bridged {
        return Err(ContractError::InvalidConfig {
            reason: "the bridged asset is always harvested".to_string(),
        });
    }

    let mut tokens = REWARD_TOKENS.may_load(deps.storage)?.unwrap_or_default();
    tokens.retain(|t| *t != token);
    if enabled {
        tokens.push(token.clone());
    }
    REWARD_TOKENS.save(deps.storage, &tokens)?;

    Ok(Response::new()
        .add_attribute("method", "set_reward_token")
        .add_attribute("token", token.key())
        .add_attribute("enabled", enabled.to_string()))
}

pub fn execute_set_reward_bridge(
    deps: DepsMut,
    info: MessageInfo,
    token: AssetInfo,
    lockbox: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info)?;

    let lockbox = deps.api.addr_validate(&lockbox)?;
    REWARD_BRIDGES.save(deps.storage, &token.key(), &lockbox)?;

    Ok(Response::new()
        .add_attribute("method", "set_reward_bridge")
        .add_attribute("token", token.key())
        .add_attribute("lockbox", lockbox))
}
