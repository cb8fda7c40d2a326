use common::epoch_of;
use cosmwasm_std::{Binary, Deps, Env, StdResult};

use crate::msg::{
    ConfigResponse, EpochFlowResponse, QueuedTransferEntry, QueuedTransfersResponse,
    StatsResponse, TrustedRemoteResponse,
};
use crate::state::{CONFIG, FLOWS, REMOTES, STATS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        guardian: config.guardian,
        paused: config.paused,
        transport: config.transport,
        canonical_chain_id: config.canonical_chain_id,
        epoch_duration: config.epoch_duration,
        inflow_limit: config.inflow_limit,
        queue_delay: config.queue_delay,
    })
}

pub fn query_epoch_flow(deps: Deps, env: Env, epoch: Option<u64>) -> StdResult<EpochFlowResponse> {
    let config = CONFIG.load(deps.storage)?;
    let epoch =
        epoch.unwrap_or_else(|| epoch_of(env.block.time.seconds(), config.epoch_duration));
    let flow = FLOWS.flow(deps.storage, epoch)?;
    Ok(EpochFlowResponse {
        epoch,
        inflow: flow.inflow,
        outflow: flow.outflow,
        limit: config.inflow_limit,
    })
}

pub fn query_queued_transfers(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<QueuedTransfersResponse> {
    let config = CONFIG.load(deps.storage)?;
    let limit = limit.unwrap_or(10).min(50) as usize;

    let transfers = FLOWS
        .list(deps.storage, start_after.as_deref(), limit)?
        .into_iter()
        .map(|(hash, transfer)| QueuedTransferEntry {
            hash: Binary::from(hash.to_vec()),
            matures_at: transfer.queued_at.saturating_add(config.queue_delay),
            transfer,
        })
        .collect();

    Ok(QueuedTransfersResponse { transfers })
}

pub fn query_trusted_remote(deps: Deps, chain_id: u64) -> StdResult<TrustedRemoteResponse> {
    Ok(TrustedRemoteResponse {
        chain_id,
        remote: REMOTES.trusted(deps.storage, chain_id)?,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_bridged_out: stats.total_bridged_out,
        total_received: stats.total_received,
        total_queued: stats.total_queued,
        total_processed: stats.total_processed,
    })
}
