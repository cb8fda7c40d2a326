//! Canonical Lockbox - Entry Points
//!
//! The execute and query dispatchers are public and generic over [`Custody`]
//! so that other lockboxes can route the shared messages through them.

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use common::{AssetInfo, DEFAULT_EPOCH_DURATION};

use crate::custody::{Custody, Escrow};
use crate::error::ContractError;
use crate::execute::{
    execute_bridge_out_native, execute_pause, execute_process_queued, execute_receive,
    execute_receive_message, execute_remove_trusted_remote, execute_rescue, execute_set_guardian,
    execute_set_inflow_limit, execute_set_queue_delay, execute_set_transport,
    execute_set_trusted_remote, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_backing, query_config, query_current_epoch, query_epoch_flow, query_message_received,
    query_queued_transfer, query_queued_transfers, query_stats, query_trusted_remote,
    query_trusted_remotes,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_QUEUE_DELAY, ESCROWED,
    MAX_QUEUE_DELAY, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = init_lockbox(deps, msg)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("asset", config.asset.key())
        .add_attribute("inflow_limit", config.inflow_limit.to_string())
        .add_attribute("queue_delay", config.queue_delay.to_string()))
}

/// Validate and store the lockbox configuration and zeroed counters.
pub fn init_lockbox(deps: DepsMut, msg: InstantiateMsg) -> Result<Config, ContractError> {
    let owner = deps.api.addr_validate(&msg.owner)?;
    let sudo = deps.api.addr_validate(&msg.sudo)?;
    let transport = deps.api.addr_validate(&msg.transport)?;

    let asset = match msg.asset {
        AssetInfo::Native { denom } if denom.is_empty() => {
            return Err(ContractError::InvalidConfig {
                reason: "denom must not be empty".to_string(),
            })
        }
        AssetInfo::Cw20 { contract_addr } => {
            AssetInfo::cw20(deps.api.addr_validate(contract_addr.as_str())?)
        }
        native => native,
    };

    let epoch_duration = msg.epoch_duration.unwrap_or(DEFAULT_EPOCH_DURATION);
    if epoch_duration == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "epoch duration must be greater than zero".to_string(),
        });
    }

    let queue_delay = msg.queue_delay.unwrap_or(DEFAULT_QUEUE_DELAY);
    if queue_delay > MAX_QUEUE_DELAY {
        return Err(ContractError::InvalidConfig {
            reason: format!("queue delay cannot exceed {} seconds", MAX_QUEUE_DELAY),
        });
    }

    let config = Config {
        owner,
        sudo,
        guardian: None,
        paused: false,
        asset,
        transport,
        epoch_duration,
        inflow_limit: msg.inflow_limit,
        queue_delay,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;
    ESCROWED.save(deps.storage, &Uint128::zero())?;

    Ok(config)
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    dispatch(deps, env, info, &Escrow, msg)
}

/// Route a lockbox message to its handler using `custody` for the asset.
pub fn dispatch<C: Custody>(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    custody: &C,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::BridgeOut {
            dest_chain_id,
            recipient,
        } => execute_bridge_out_native(deps, env, info, custody, dest_chain_id, recipient),
        ExecuteMsg::Receive(wrapper) => execute_receive(deps, env, info, custody, wrapper),
        ExecuteMsg::ReceiveMessage(msg) => {
            execute_receive_message(deps, env, info, custody, msg)
        }
        ExecuteMsg::ProcessQueued {
            epoch,
            chain_id,
            recipient,
            amount,
            queued_at,
        } => execute_process_queued(
            deps, env, custody, epoch, chain_id, recipient, amount, queued_at,
        ),

        // Configuration
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::SetInflowLimit { limit } => execute_set_inflow_limit(deps, info, limit),
        ExecuteMsg::SetQueueDelay { delay_seconds } => {
            execute_set_queue_delay(deps, info, delay_seconds)
        }
        ExecuteMsg::SetTrustedRemote { chain_id, remote } => {
            execute_set_trusted_remote(deps, info, chain_id, remote)
        }
        ExecuteMsg::RemoveTrustedRemote { chain_id } => {
            execute_remove_trusted_remote(deps, info, chain_id)
        }
        ExecuteMsg::SetTransport { transport } => execute_set_transport(deps, info, transport),
        ExecuteMsg::SetGuardian { guardian } => execute_set_guardian(deps, info, guardian),

        // Emergency
        ExecuteMsg::Rescue {
            asset,
            recipient,
            amount,
        } => execute_rescue(deps, info, custody, asset, recipient, amount),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    dispatch_query(deps, env, &Escrow, msg)
}

pub fn dispatch_query<C: Custody>(
    deps: Deps,
    env: Env,
    custody: &C,
    msg: QueryMsg,
) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CurrentEpoch {} => to_json_binary(&query_current_epoch(deps, env)?),
        QueryMsg::EpochFlow { epoch } => to_json_binary(&query_epoch_flow(deps, env, epoch)?),
        QueryMsg::QueuedTransfer {
            epoch,
            chain_id,
            recipient,
            amount,
            queued_at,
        } => to_json_binary(&query_queued_transfer(
            deps, env, epoch, chain_id, recipient, amount, queued_at,
        )?),
        QueryMsg::QueuedTransfers { start_after, limit } => {
            to_json_binary(&query_queued_transfers(deps, start_after, limit)?)
        }
        QueryMsg::TrustedRemote { chain_id } => {
            to_json_binary(&query_trusted_remote(deps, chain_id)?)
        }
        QueryMsg::TrustedRemotes {} => to_json_binary(&query_trusted_remotes(deps)?),
        QueryMsg::Backing {} => to_json_binary(&query_backing(deps, custody)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::MessageReceived { chain_id, nonce } => {
            to_json_binary(&query_message_received(deps, chain_id, nonce)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
