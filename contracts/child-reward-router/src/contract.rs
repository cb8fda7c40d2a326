//! Child Reward Router - Entry Points

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use common::DEFAULT_EPOCH_DURATION;

use crate::error::ContractError;
use crate::execute::{
    execute_process_rewards, execute_receive_message, execute_set_distributor,
    execute_set_pool_ids, execute_set_trusted_remote,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_distribution, query_epoch_status, query_is_distributor, query_pool_id,
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
        stash: deps.api.addr_validate(&msg.stash)?,
        registry: deps.api.addr_validate(&msg.registry)?,
        transport: deps.api.addr_validate(&msg.transport)?,
        canonical_chain_id: msg.canonical_chain_id,
        epoch_duration,
        stash_periods,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("reward_token", config.reward_token)
        .add_attribute("canonical_chain_id", config.canonical_chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ReceiveMessage(msg) => execute_receive_message(deps, info, msg),
        ExecuteMsg::ProcessRewards { epoch, gauges } => {
            execute_process_rewards(deps, info, epoch, gauges)
        }
        ExecuteMsg::SetPoolIds { start, end } => execute_set_pool_ids(deps, info, start, end),
        ExecuteMsg::SetDistributor {
            address,
            authorized,
        } => execute_set_distributor(deps, info, address, authorized),
        ExecuteMsg::SetTrustedRemote { chain_id, remote } => {
            execute_set_trusted_remote(deps, info, chain_id, remote)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::EpochStatus { epoch } => to_json_binary(&query_epoch_status(deps, env, epoch)?),
        QueryMsg::Distribution { epoch, gauge } => {
            to_json_binary(&query_distribution(deps, epoch, gauge)?)
        }
        QueryMsg::PoolId { gauge } => to_json_binary(&query_pool_id(deps, gauge)?),
        QueryMsg::IsDistributor { address } => {
            to_json_binary(&query_is_distributor(deps, address)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
