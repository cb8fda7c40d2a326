//! Execute handlers for the child reward router

use common::interfaces::{fund_msg, registry_pools};
use common::message::RouterPayload;
use common::InboundMessage;
use cosmwasm_std::{DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::state::{
    Config, Distribution, CONFIG, DISTRIBUTIONS, DISTRIBUTORS, EPOCHS, POOL_IDS, REMOTES,
};

// ============================================================================
// Inbound
// ============================================================================

pub fn execute_receive_message(
    deps: DepsMut,
    info: MessageInfo,
    msg: InboundMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    REMOTES.accept(deps.storage, &config.transport, &info.sender, &msg)?;

    let RouterPayload::SetDistributions {
        epoch,
        distributions,
    } = msg.decode::<RouterPayload>()?;

    let mut tally = EPOCHS.may_load(deps.storage, epoch)?.unwrap_or_default();
    for distribution in &distributions {
        let key = (epoch, distribution.gauge.as_str());
        if DISTRIBUTIONS.has(deps.storage, key) {
            return Err(ContractError::DuplicateDistribution {
                epoch,
                gauge: distribution.gauge.clone(),
            });
        }
        DISTRIBUTIONS.save(
            deps.storage,
            key,
            &Distribution {
                amount: distribution.amount,
                funded: false,
            },
        )?;
        tally.gauges += 1;
        tally.total = tally.total.checked_add(distribution.amount)?;
    }
    EPOCHS.save(deps.storage, epoch, &tally)?;

    Ok(Response::new()
        .add_attribute("method", "set_distributions")
        .add_attribute("nonce", msg.nonce.to_string())
        .add_attribute("epoch", epoch.to_string())
        .add_attribute("gauges", distributions.len().to_string())
        .add_attribute("total", tally.total.to_string()))
}

// ============================================================================
// Funding
// ============================================================================

pub fn execute_process_rewards(
    deps: DepsMut,
    info: MessageInfo,
    epoch: u64,
    gauges: Vec<String>,
) -> Result<Response, ContractError> {
    if !DISTRIBUTORS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false)
    {
        return Err(ContractError::UnauthorizedDistributor);
    }
    let config = CONFIG.load(deps.storage)?;
    if gauges.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "no gauges to process".to_string(),
        });
    }
    let mut tally = EPOCHS.may_load(deps.storage, epoch)?.unwrap_or_default();

    let mut response = Response::new()
        .add_attribute("method", "process_rewards")
        .add_attribute("epoch", epoch.to_string());

    for gauge in gauges {
        let key = (epoch, gauge.as_str());
        let mut distribution = DISTRIBUTIONS.may_load(deps.storage, key)?.ok_or_else(|| {
            ContractError::UnknownDistribution {
                epoch,
                gauge: gauge.clone(),
            }
        })?;
        if distribution.funded {
            return Err(ContractError::AlreadyProcessed { epoch, gauge });
        }
        let pool_id = POOL_IDS
            .may_load(deps.storage, gauge.as_str())?
            .ok_or_else(|| ContractError::PoolNotConfigured {
                gauge: gauge.clone(),
            })?;

        distribution.funded = true;
        DISTRIBUTIONS.save(deps.storage, key, &distribution)?;
        tally.funded += 1;

        if !distribution.amount.is_zero() {
            response = response.add_message(fund_msg(
                &config.reward_token,
                &config.stash,
                pool_id,
                config.stash_periods,
                distribution.amount,
            )?);
        }
        response = response.add_attribute("funded", format!("{}:{}", gauge, distribution.amount));
    }
    EPOCHS.save(deps.storage, epoch, &tally)?;

    Ok(response)
}

// ============================================================================
// Configuration
// ============================================================================

fn load_as_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

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
        mapped += 1;
    }

    Ok(Response::new()
        .add_attribute("method", "set_pool_ids")
        .add_attribute("mapped", mapped.to_string()))
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

pub fn execute_set_trusted_remote(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    remote: String,
) -> Result<Response, ContractError> {
    let config = load_as_owner(deps.storage, &info)?;
    if remote.is_empty() || chain_id != config.canonical_chain_id {
        return Err(ContractError::InvalidConfig {
            reason: format!("only the router on chain {} is trusted", config.canonical_chain_id),
        });
    }
    REMOTES.set_trusted(deps.storage, chain_id, &remote)?;

    Ok(Response::new()
        .add_attribute("method", "set_trusted_remote")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("remote", remote))
}
