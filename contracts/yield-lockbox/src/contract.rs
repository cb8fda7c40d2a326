//! Yield-Backed Lockbox - Entry Points

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use common::AssetInfo;
use lockbox::contract::{dispatch, dispatch_query, init_lockbox};
use lockbox::msg::{ExecuteMsg as LockboxExecuteMsg, QueryMsg as LockboxQueryMsg};

use crate::custody::YieldCustody;
use crate::error::ContractError;
use crate::execute::{
    execute_distribute_harvest, execute_harvest, execute_process_claimable,
    execute_set_harvester, execute_set_reward_bridge, execute_set_reward_receiver,
    execute_set_reward_token,
};
use crate::msg::{CallbackMsg, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_claimable, query_internal_total_supply, query_is_harvester, query_reward_receiver,
    query_reward_tokens, query_total_claimable, query_yield_config,
};
use crate::state::{
    YieldConfig, CONTRACT_NAME, CONTRACT_VERSION, INTERNAL_TOTAL_SUPPLY, REWARD_TOKENS,
    YIELD_CONFIG,
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

    if let AssetInfo::Native { .. } = msg.asset {
        return Err(ContractError::InvalidConfig {
            reason: "the vault underlying must be a CW20 token".to_string(),
        });
    }

    let vault = deps.api.addr_validate(&msg.vault)?;
    YIELD_CONFIG.save(deps.storage, &YieldConfig { vault: vault.clone() })?;
    INTERNAL_TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;
    REWARD_TOKENS.save(deps.storage, &vec![])?;

    let config = init_lockbox(
        deps,
        lockbox::msg::InstantiateMsg {
            owner: msg.owner,
            sudo: msg.sudo,
            asset: msg.asset,
            transport: msg.transport,
            inflow_limit: msg.inflow_limit,
            queue_delay: msg.queue_delay,
            epoch_duration: msg.epoch_duration,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("asset", config.asset.key())
        .add_attribute("vault", vault))
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
    let shared = match msg {
        // Yield
        ExecuteMsg::Harvest {
            chain_ids,
            weights,
            slippage_bps,
        } => return execute_harvest(deps, env, info, chain_ids, weights, slippage_bps),
        ExecuteMsg::Callback(CallbackMsg::DistributeHarvest { chain_ids, weights }) => {
            return execute_distribute_harvest(deps, env, info, chain_ids, weights)
        }
        ExecuteMsg::ProcessClaimable { token, chain_id } => {
            return execute_process_claimable(deps, token, chain_id)
        }
        ExecuteMsg::SetRewardReceiver { chain_id, receiver } => {
            return execute_set_reward_receiver(deps, info, chain_id, receiver)
        }
        ExecuteMsg::SetHarvester {
            address,
            authorized,
        } => return execute_set_harvester(deps, info, address, authorized),
        ExecuteMsg::SetRewardToken { token, enabled } => {
            return execute_set_reward_token(deps, info, token, enabled)
        }
        ExecuteMsg::SetRewardBridge { token, lockbox } => {
            return execute_set_reward_bridge(deps, info, token, lockbox)
        }

        // Lockbox
        ExecuteMsg::BridgeOut {
            dest_chain_id,
            recipient,
        } => LockboxExecuteMsg::BridgeOut {
            dest_chain_id,
            recipient,
        },
        ExecuteMsg::Receive(wrapper) => LockboxExecuteMsg::Receive(wrapper),
        ExecuteMsg::ReceiveMessage(inbound) => LockboxExecuteMsg::ReceiveMessage(inbound),
        ExecuteMsg::ProcessQueued {
            epoch,
            chain_id,
            recipient,
            amount,
            queued_at,
        } => LockboxExecuteMsg::ProcessQueued {
            epoch,
            chain_id,
            recipient,
            amount,
            queued_at,
        },
        ExecuteMsg::Pause {} => LockboxExecuteMsg::Pause {},
        ExecuteMsg::Unpause {} => LockboxExecuteMsg::Unpause {},
        ExecuteMsg::SetInflowLimit { limit } => LockboxExecuteMsg::SetInflowLimit { limit },
        ExecuteMsg::SetQueueDelay { delay_seconds } => {
            LockboxExecuteMsg::SetQueueDelay { delay_seconds }
        }
        ExecuteMsg::SetTrustedRemote { chain_id, remote } => {
            LockboxExecuteMsg::SetTrustedRemote { chain_id, remote }
        }
        ExecuteMsg::RemoveTrustedRemote { chain_id } => {
            LockboxExecuteMsg::RemoveTrustedRemote { chain_id }
        }
        ExecuteMsg::SetTransport { transport } => LockboxExecuteMsg::SetTransport { transport },
        ExecuteMsg::SetGuardian { guardian } => LockboxExecuteMsg::SetGuardian { guardian },
        ExecuteMsg::Rescue {
            asset,
            recipient,
            amount,
        } => LockboxExecuteMsg::Rescue {
            asset,
            recipient,
            amount,
        },
    };

    let custody = YieldCustody::load(deps.storage)?;
    Ok(dispatch(deps, env, info, &custody, shared)?)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    let shared = match msg {
        QueryMsg::YieldConfig {} => return to_json_binary(&query_yield_config(deps)?),
        QueryMsg::InternalTotalSupply {} => {
            return to_json_binary(&query_internal_total_supply(deps)?)
        }
        QueryMsg::Claimable { token, chain_id } => {
            return to_json_binary(&query_claimable(deps, token, chain_id)?)
        }
        QueryMsg::TotalClaimable { token } => {
            return to_json_binary(&query_total_claimable(deps, token)?)
        }
        QueryMsg::RewardReceiver { chain_id } => {
            return to_json_binary(&query_reward_receiver(deps, chain_id)?)
        }
        QueryMsg::IsHarvester { address } => {
            return to_json_binary(&query_is_harvester(deps, address)?)
        }
        QueryMsg::RewardTokens {} => return to_json_binary(&query_reward_tokens(deps)?),

        QueryMsg::Config {} => LockboxQueryMsg::Config {},
        QueryMsg::CurrentEpoch {} => LockboxQueryMsg::CurrentEpoch {},
        QueryMsg::EpochFlow { epoch } => LockboxQueryMsg::EpochFlow { epoch },
        QueryMsg::QueuedTransfer {
            epoch,
            chain_id,
            recipient,
            amount,
            queued_at,
        } => LockboxQueryMsg::QueuedTransfer {
            epoch,
            chain_id,
            recipient,
            amount,
            queued_at,
        },
        QueryMsg::QueuedTransfers { start_after, limit } => {
            LockboxQueryMsg::QueuedTransfers { start_after, limit }
        }
        QueryMsg::TrustedRemote { chain_id } => LockboxQueryMsg::TrustedRemote { chain_id },
        QueryMsg::TrustedRemotes {} => LockboxQueryMsg::TrustedRemotes {},
        QueryMsg::Backing {} => LockboxQueryMsg::Backing {},
        QueryMsg::Stats {} => LockboxQueryMsg::Stats {},
        QueryMsg::MessageReceived { chain_id, nonce } => {
            LockboxQueryMsg::MessageReceived { chain_id, nonce }
        }
    };

    let custody = YieldCustody::load(deps.storage)?;
    dispatch_query(deps, env, &custody, shared)
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
