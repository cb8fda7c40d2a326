//! Query handlers for the canonical lockbox.

use common::epoch::{epoch_end, epoch_start};
use common::epoch_of;
use cosmwasm_std::{Binary, Deps, Env, StdResult, Uint128};

use crate::custody::Custody;
use crate::msg::{
    BackingResponse, ConfigResponse, EpochFlowResponse, EpochResponse, MessageReceivedResponse,
    QueuedTransferEntry, QueuedTransferResponse, QueuedTransfersResponse, StatsResponse,
    TrustedRemoteResponse, TrustedRemotesResponse,
};
use crate::state::{CONFIG, FLOWS, REMOTES, STATS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        sudo: config.sudo,
        guardian: config.guardian,
        paused: config.paused,
        asset: config.asset,
        transport: config.transport,
        epoch_duration: config.epoch_duration,
        inflow_limit: config.inflow_limit,
        queue_delay: config.queue_delay,
    })
}

pub fn query_current_epoch(deps: Deps, env: Env) -> StdResult<EpochResponse> {
    let config = CONFIG.load(deps.storage)?;
    let epoch = epoch_of(env.block.time.seconds(), config.epoch_duration);
    Ok(EpochResponse {
        epoch,
        starts_at: epoch_start(epoch, config.epoch_duration),
        ends_at: epoch_end(epoch, config.epoch_duration),
    })
}

/// Flow recorded for `epoch`, defaulting to the current one.
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
        inflow_remaining: config.inflow_limit.saturating_sub(flow.inflow),
        outflow_remaining: config.inflow_limit.saturating_sub(flow.outflow),
    })
}

pub fn query_queued_transfer(
    deps: Deps,
    env: Env,
    epoch: u64,
    chain_id: u64,
    recipient: String,
    amount: Uint128,
    queued_at: u64,
) -> StdResult<QueuedTransferResponse> {
    let config = CONFIG.load(deps.storage)?;
    let found = FLOWS.locate(deps.storage, epoch, chain_id, &recipient, amount, queued_at)?;
    let remaining_seconds = found
        .as_ref()
        .map(|(_, t)| t.remaining(config.queue_delay, env.block.time.seconds()))
        .unwrap_or(0);
    let (hash, transfer) = match found {
        Some((key, transfer)) => (Some(Binary::from(key.to_vec())), Some(transfer)),
        None => (None, None),
    };

    Ok(QueuedTransferResponse {
        exists: transfer.is_some(),
        hash,
        transfer,
        remaining_seconds,
    })
}

/// Live queue entries, paginated by hash.
pub fn query_queued_transfers(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<QueuedTransfersResponse> {
    let config = CONFIG.load(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

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

pub fn query_trusted_remotes(deps: Deps) -> StdResult<TrustedRemotesResponse> {
    let remotes = REMOTES
        .all_trusted(deps.storage)?
        .into_iter()
        .map(|(chain_id, remote)| TrustedRemoteResponse {
            chain_id,
            remote: Some(remote),
        })
        .collect();
    Ok(TrustedRemotesResponse { remotes })
}

pub fn query_backing<C: Custody>(deps: Deps, custody: &C) -> StdResult<BackingResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(BackingResponse {
        asset: config.asset,
        amount: custody.backing(deps.storage)?,
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

pub fn query_message_received(
    deps: Deps,
    chain_id: u64,
    nonce: u64,
) -> StdResult<MessageReceivedResponse> {
    Ok(MessageReceivedResponse {
        received: REMOTES.is_received(deps.storage, chain_id, nonce)?,
    })
}
