//! Reward Router - Entry Points

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use common::DEFAULT_EPOCH_DURATION;

use crate::error::ContractError;
use crate::execute::{
    execute_process_rewards, execute_set_distributor, execute_set_dst_chain_ids,
    execute_set_no_deposit_gauge, execute_set_pool_ids, execute_set_reward_per_epoch,
    execute_set_trusted_remote, execute_set_voter, execute_vote_gauge_weight,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_epoch_info, query_epoch_status, query_gauge_info, query_is_distributor,
    query_trusted_remote, query_weight,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_STASH_PERIODS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let epoch_duration = msg.epoch_duration.unwrap_or(DEFAULT_EPOCH_DURATION);
    let stash_periods = msg.stash_periods.unwrap_or(DEFAULT_STASH_PERIODS);
    if epoch_duration == 0 || stash_periods == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "epoch duration and stash periods must be positive".to_string(),
        });
    }

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        reward_token: deps.api.addr_validate(&msg.reward_token)?,
        reward_lockbox: deps.api.addr_validate(&msg.reward_lockbox)?,
        stash: deps.api.addr_validate(&msg.stash)?,
        registry: deps.api.addr_validate(&msg.registry)?,
        voter: msg
            .voter
            .as_deref()
            .map(|voter| deps.api.addr_validate(voter))
            .transpose()?,
        transport: deps.api.addr_validate(&msg.transport)?,
        chain_id: msg.chain_id,
        epoch_duration,
        stash_periods,
        reward_per_epoch: msg.reward_per_epoch,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("reward_token", config.reward_token)
        .add_attribute("chain_id", config.chain_id.to_string())
        .add_attribute("epoch_duration", epoch_duration.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::VoteGaugeWeight { gauges, weights } => {
            execute_vote_gauge_weight(deps, env, info, gauges, weights)
        }
        ExecuteMsg::ProcessRewards { epoch, gauges } => {
            execute_process_rewards(deps, env, info, epoch, gauges)
        }
        ExecuteMsg::SetPoolIds { start, end } => execute_set_pool_ids(deps, info, start, end),
        ExecuteMsg::SetDstChainIds { gauges, chain_id } => {
            execute_set_dst_chain_ids(deps, info, gauges, chain_id)
        }
        ExecuteMsg::SetNoDepositGauge { gauge, no_deposit } => {
            execute_set_no_deposit_gauge(deps, info, gauge, no_deposit)
        }
        ExecuteMsg::SetRewardPerEpoch { amount } => {
            execute_set_reward_per_epoch(deps, info, amount)
        }
        ExecuteMsg::SetDistributor {
            address,
            authorized,
        } => execute_set_distributor(deps, info, address, authorized),
        ExecuteMsg::SetVoter { voter } => execute_set_voter(deps, info, voter),
        ExecuteMsg::SetTrustedRemote { chain_id, remote } => {
            execute_set_trusted_remote(deps, info, chain_id, remote)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::EpochStatus { epoch } => to_json_binary(&query_epoch_status(deps, env, epoch)?),
        QueryMsg::EpochInfo { epoch } => to_json_binary(&query_epoch_info(deps, epoch)?),
        QueryMsg::GaugeInfo { gauge } => to_json_binary(&query_gauge_info(deps, gauge)?),
        QueryMsg::Weight { epoch, gauge } => to_json_binary(&query_weight(deps, epoch, gauge)?),
        QueryMsg::IsDistributor { address } => {
            to_json_binary(&query_is_distributor(deps, address)?)
        }
        QueryMsg::TrustedRemote { chain_id } => {
            to_json_binary(&query_trusted_remote(deps, chain_id)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
