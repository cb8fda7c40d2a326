//! Satellite Coordinator - Entry Points

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_mint, execute_queue_new_rewards, execute_receive_message, execute_set_reward_registry,
    execute_set_transport, execute_set_trusted_remote, execute_sync_mint_rate,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_accounting, query_config, query_mint_rate, query_preview_mint};
use crate::state::{Accounting, Config, ACCOUNTING, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        emission_token: deps.api.addr_validate(&msg.emission_token)?,
        reward_registry: deps.api.addr_validate(&msg.reward_registry)?,
        transport: deps.api.addr_validate(&msg.transport)?,
        canonical_chain_id: msg.canonical_chain_id,
    };
    CONFIG.save(deps.storage, &config)?;
    ACCOUNTING.save(deps.storage, &Accounting::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("emission_token", config.emission_token)
        .add_attribute("canonical_chain_id", config.canonical_chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::QueueNewRewards {
            fee_amount,
            reward_amount,
        } => execute_queue_new_rewards(deps, env, info, fee_amount, reward_amount),
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, env, info, recipient, amount),
        ExecuteMsg::SyncMintRate {} => execute_sync_mint_rate(deps, env),
        ExecuteMsg::ReceiveMessage(msg) => execute_receive_message(deps, env, info, msg),
        ExecuteMsg::SetRewardRegistry { registry } => {
            execute_set_reward_registry(deps, info, registry)
        }
        ExecuteMsg::SetTrustedRemote { chain_id, remote } => {
            execute_set_trusted_remote(deps, info, chain_id, remote)
        }
        ExecuteMsg::SetTransport { transport } => execute_set_transport(deps, info, transport),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MintRate {} => to_json_binary(&query_mint_rate(deps)?),
        QueryMsg::Accounting {} => to_json_binary(&query_accounting(deps, env)?),
        QueryMsg::PreviewMint { amount } => to_json_binary(&query_preview_mint(deps, amount)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
