use common::{epoch_of, EpochStatus};
use cosmwasm_std::{Deps, Env, StdResult, Uint128};

use crate::msg::{
    ConfigResponse, DistributionResponse, EpochStatusResponse, IsDistributorResponse,
    PoolIdResponse,
};
use crate::state::{EpochTally, CONFIG, DISTRIBUTIONS, DISTRIBUTORS, EPOCHS, POOL_IDS, REMOTES};

fn tally_status(epoch: u64, current: u64, tally: Option<&EpochTally>) -> EpochStatus {
    match tally {
        Some(tally) if tally.funded >= tally.gauges => EpochStatus::Distributed,
        Some(_) => EpochStatus::Queued,
        None if epoch >= current => EpochStatus::Open,
        None => EpochStatus::Closed,
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let canonical_router = REMOTES.trusted(deps.storage, config.canonical_chain_id)?;
    Ok(ConfigResponse {
        owner: config.owner,
        reward_token: config.reward_token,
        stash: config.stash,
        registry: config.registry,
        transport: config.transport,
        canonical_chain_id: config.canonical_chain_id,
        canonical_router,
        epoch_duration: config.epoch_duration,
        stash_periods: config.stash_periods,
    })
}

pub fn query_epoch_status(deps: Deps, env: Env, epoch: u64) -> StdResult<EpochStatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let current = epoch_of(env.block.time.seconds(), config.epoch_duration);
    let tally = EPOCHS.may_load(deps.storage, epoch)?;
    let status = tally_status(epoch, current, tally.as_ref());
    let tally = tally.unwrap_or_default();
    Ok(EpochStatusResponse {
        epoch,
        status,
        gauges: tally.gauges,
        funded: tally.funded,
        total: tally.total,
    })
}

pub fn query_distribution(deps: Deps, epoch: u64, gauge: String) -> StdResult<DistributionResponse> {
    let distribution = DISTRIBUTIONS.may_load(deps.storage, (epoch, gauge.as_str()))?;
    Ok(DistributionResponse {
        epoch,
        amount: distribution
            .as_ref()
            .map(|d| d.amount)
            .unwrap_or_else(Uint128::zero),
        funded: distribution.map(|d| d.funded).unwrap_or(false),
        gauge,
    })
}

pub fn query_pool_id(deps: Deps, gauge: String) -> StdResult<PoolIdResponse> {
    Ok(PoolIdResponse {
        pool_id: POOL_IDS.may_load(deps.storage, &gauge)?,
        gauge,
    })
}

pub fn query_is_distributor(deps: Deps, address: String) -> StdResult<IsDistributorResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(IsDistributorResponse {
        is_distributor: DISTRIBUTORS.may_load(deps.storage, &addr)?.unwrap_or(false),
    })
}
