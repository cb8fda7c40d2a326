use common::{epoch_of, EpochStatus};
use cosmwasm_std::{Deps, Env, StdResult};

use crate::msg::{
    ConfigResponse, EpochInfoResponse, EpochStatusResponse, GaugeInfoResponse,
    IsDistributorResponse, TrustedRemoteResponse, WeightResponse,
};
use crate::state::{
    EpochRecord, CONFIG, DISTRIBUTORS, DST_CHAIN_IDS, EPOCHS, NO_DEPOSIT_GAUGES, POOL_IDS,
    PROCESSED, REMOTES, WEIGHTS,
};

/// Status of `epoch` given the current epoch and its vote record
pub fn epoch_status(epoch: u64, current: u64, record: Option<&EpochRecord>) -> EpochStatus {
    if epoch >= current {
        return EpochStatus::Open;
    }
    match record {
        None => EpochStatus::Closed,
        Some(record) if record.eligible > 0 && record.processed == 0 => EpochStatus::Closed,
        Some(record) if record.processed < record.eligible => EpochStatus::Queued,
        Some(_) => EpochStatus::Distributed,
    }
}

pub fn query_config(deps: Deps, env: Env) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        current_epoch: epoch_of(env.block.time.seconds(), config.epoch_duration),
        owner: config.owner,
        reward_token: config.reward_token,
        reward_lockbox: config.reward_lockbox,
        stash: config.stash,
        registry: config.registry,
        voter: config.voter,
        transport: config.transport,
        chain_id: config.chain_id,
        epoch_duration: config.epoch_duration,
        stash_periods: config.stash_periods,
        reward_per_epoch: config.reward_per_epoch,
    })
}

pub fn query_epoch_status(deps: Deps, env: Env, epoch: u64) -> StdResult<EpochStatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let current = epoch_of(env.block.time.seconds(), config.epoch_duration);
    let record = EPOCHS.may_load(deps.storage, epoch)?;
    Ok(EpochStatusResponse {
        epoch,
        status: epoch_status(epoch, current, record.as_ref()),
    })
}

pub fn query_epoch_info(deps: Deps, epoch: u64) -> StdResult<EpochInfoResponse> {
    let record = EPOCHS.may_load(deps.storage, epoch)?;
    let voted = record.is_some();
    let record = record.unwrap_or_default();
    Ok(EpochInfoResponse {
        epoch,
        voted,
        reward: record.reward,
        total_weight: record.total_weight,
        eligible: record.eligible,
        processed: record.processed,
    })
}

pub fn query_gauge_info(deps: Deps, gauge: String) -> StdResult<GaugeInfoResponse> {
    Ok(GaugeInfoResponse {
        pool_id: POOL_IDS.may_load(deps.storage, &gauge)?,
        dst_chain_id: DST_CHAIN_IDS.may_load(deps.storage, &gauge)?,
        no_deposit: NO_DEPOSIT_GAUGES
            .may_load(deps.storage, &gauge)?
            .unwrap_or(false),
        gauge,
    })
}

pub fn query_weight(deps: Deps, epoch: u64, gauge: String) -> StdResult<WeightResponse> {
    let vote = WEIGHTS.may_load(deps.storage, (epoch, gauge.as_str()))?;
    let funded = PROCESSED.may_load(deps.storage, (epoch, gauge.as_str()))?;
    Ok(WeightResponse {
        epoch,
        weight: vote.as_ref().map(|vote| vote.weight).unwrap_or(0),
        dst_chain_id: vote.map(|vote| vote.dst_chain_id),
        funded,
        gauge,
    })
}

pub fn query_is_distributor(deps: Deps, address: String) -> StdResult<IsDistributorResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(IsDistributorResponse {
        is_distributor: DISTRIBUTORS.may_load(deps.storage, &addr)?.unwrap_or(false),
    })
}

pub fn query_trusted_remote(deps: Deps, chain_id: u64) -> StdResult<TrustedRemoteResponse> {
    Ok(TrustedRemoteResponse {
        chain_id,
        remote: REMOTES.trusted(deps.storage, chain_id)?,
    })
}
