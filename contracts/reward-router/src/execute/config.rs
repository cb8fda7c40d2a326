use common::interfaces::registry_pools;
use cosmwasm_std::{DepsMut, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{
    Config, CONFIG, DISTRIBUTORS, DST_CHAIN_IDS, NO_DEPOSIT_GAUGES, POOL_IDS, REMOTES,
};

fn load_as_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

// ============================================================================
// Gauge mapping
// ============================================================================

/// Walk registry pools `start..end`; live pools map their gauge to the pool id
/// and, unless already mapped elsewhere, to this chain.
pub fn execute_set_pool_ids(
    deps: DepsMut,
    info: MessageInfo,
    start: u64,
    end: u64,
) -> Result<Response, ContractError> {
    let config = load_as_owner(deps.storage, &info)?;
    if start >= end {
        return Err(ContractError::InvalidConfig {
            reason: format!("empty pool range {}..{}", start, end),
        });
    }

    let pools = registry_pools(&deps.querier, &config.registry, start, end)?;
    let mut mapped = 0u64;
    for pool in pools.iter().filter(|pool| !pool.shutdown) {
        POOL_IDS.save(deps.storage, &pool.gauge, &pool.pid)?;
        if !DST_CHAIN_IDS.has(deps.storage, &pool.gauge) {
            DST_CHAIN_IDS.save(deps.storage, &pool.gauge, &config.chain_id)?;
        }
        mapped += 1;
    }

    Ok(Response::new()
        .add_attribute("method", "set_pool_ids")
        .add_attribute("start", start.to_string())
        .add_attribute("end", end.to_string())
        .add_attribute("mapped", mapped.to_string()))
}

pub fn execute_set_dst_chain_ids(
    deps: DepsMut,
    info: MessageInfo,
    gauges: Vec<String>,
    chain_id: u64,
) -> Result<Response, ContractError> {
    load_as_owner(deps.storage, &info)?;
    for gauge in &gauges {
        DST_CHAIN_IDS.save(deps.storage, gauge, &chain_id)?;
    }

    Ok(Response::new()
        .add_attribute("method", "set_dst_chain_ids")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("gauges", gauges.len().to_string()))
}

pub fn execute_set_no_deposit_gauge(
    deps: DepsMut,
    info: MessageInfo,
    gauge: String,
    no_deposit: bool,
) -> Result<Response, ContractError> {
    load_as_owner(deps.storage, &info)?;
    if no_deposit {
        NO_DEPOSIT_GAUGES.save(deps.storage, &gauge, &true)?;
    } else {
        NO_DEPOSIT_GAUGES.remove(deps.storage, &gauge);
    }

    Ok(Response::new()
        .add_attribute("method", "set_no_deposit_gauge")
        .add_attribute("gauge", gauge)
        .add_attribute("no_deposit", no_deposit.to_string()))
}

// ============================================================================
// Roles and budget
// ============================================================================

pub fn execute_set_reward_per_epoch(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;
    config.reward_per_epoch = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_reward_per_epoch")
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_set_distributor(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    load_as_owner(deps.storage, &info)?;
    let address = deps.api.addr_validate(&address)?;
    if authorized {
        DISTRIBUTORS.save(deps.storage, &address, &true)?;
    } else {
        DISTRIBUTORS.remove(deps.storage, &address);
    }

    Ok(Response::new()
        .add_attribute("method", "set_distributor")
        .add_attribute("address", address)
        .add_attribute("authorized", authorized.to_string()))
}

pub fn execute_set_voter(
    deps: DepsMut,
    info: MessageInfo,
    voter: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;
    config.voter = voter
        .as_deref()
        .map(|voter| deps.api.addr_validate(voter))
        .transpose()?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_voter")
        .add_attribute("voter", voter.unwrap_or_default()))
}

pub fn execute_set_trusted_remote(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    remote: String,
) -> Result<Response, ContractError> {
    let config = load_as_owner(deps.storage, &info)?;
    if remote.is_empty() || chain_id == config.chain_id {
        return Err(ContractError::InvalidConfig {
            reason: format!("invalid child router for chain {}", chain_id),
        });
    }
    REMOTES.set_trusted(deps.storage, chain_id, &remote)?;

    Ok(Response::new()
        .add_attribute("method", "set_trusted_remote")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("remote", remote))
}
