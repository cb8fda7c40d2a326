use cosmwasm_std::{DepsMut, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, MAX_QUEUE_DELAY, REMOTES};

fn load_as_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

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

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

pub fn execute_set_inflow_limit(
    deps: DepsMut,
    info: MessageInfo,
    limit: Uint128,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;

    config.inflow_limit = limit;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_inflow_limit")
        .add_attribute("limit", limit.to_string()))
}

pub fn execute_set_queue_delay(
    deps: DepsMut,
    info: MessageInfo,
    delay_seconds: u64,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;

    if delay_seconds > MAX_QUEUE_DELAY {
        return Err(ContractError::InvalidConfig {
            reason: format!("queue delay cannot exceed {} seconds", MAX_QUEUE_DELAY),
        });
    }

    config.queue_delay = delay_seconds;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_queue_delay")
        .add_attribute("delay_seconds", delay_seconds.to_string()))
}

pub fn execute_set_trusted_remote(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    remote: String,
) -> Result<Response, ContractError> {
    load_as_owner(deps.storage, &info)?;

    if remote.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "remote must not be empty".to_string(),
        });
    }

    REMOTES.set_trusted(deps.storage, chain_id, &remote)?;

    Ok(Response::new()
        .add_attribute("method", "set_trusted_remote")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("remote", remote))
}

pub fn execute_set_transport(
    deps: DepsMut,
    info: MessageInfo,
    transport: String,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;

    config.transport = deps.api.addr_validate(&transport)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_transport")
        .add_attribute("transport", transport))
}

pub fn execute_set_guardian(
    deps: DepsMut,
    info: MessageInfo,
    guardian: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;

    config.guardian = guardian
        .as_deref()
        .map(|g| deps.api.addr_validate(g))
        .transpose()?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "set_guardian"))
}
