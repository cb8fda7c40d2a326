//! Canonical Coordinator - Entry Points

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use common::AssetInfo;

use crate::error::ContractError;
use crate::execute::{
    execute_distribute_emission, execute_receive, execute_receive_message, execute_set_bridge_delegate,
    execute_set_distributor, execute_set_emission_ratio, execute_set_transport,
    execute_set_trusted_remote, execute_settle_native, execute_withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_bridge_delegate, query_config, query_fee_debt, query_is_distributor,
    query_total_minted, query_trusted_remote,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOTAL_MINTED};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.emission_ratio.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "emission ratio must be greater than zero".to_string(),
        });
    }

    let fee_asset = match msg.fee_asset {
        AssetInfo::Cw20 { contract_addr } => {
            AssetInfo::cw20(deps.api.addr_validate(contract_addr.as_str())?)
        }
        AssetInfo::Native { denom } if denom.is_empty() => {
            return Err(ContractError::InvalidConfig {
                reason: "denom must not be empty".to_string(),
            })
        }
        native => native,
    };

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        emission_token: deps.api.addr_validate(&msg.emission_token)?,
        emission_lockbox: deps.api.addr_validate(&msg.emission_lockbox)?,
        fee_asset,
        transport: deps.api.addr_validate(&msg.transport)?,
        emission_ratio: msg.emission_ratio,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_MINTED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("emission_token", config.emission_token)
        .add_attribute("emission_ratio", config.emission_ratio.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DistributeEmission {
            dest_chain_id,
            fee_amount,
            extra_payload,
        } => execute_distribute_emission(deps, env, info, dest_chain_id, fee_amount, extra_payload),
        ExecuteMsg::ReceiveMessage(msg) => execute_receive_message(deps, info, msg),
        ExecuteMsg::SettleFeeDebt { chain_id } => execute_settle_native(deps, info, chain_id),
        ExecuteMsg::Receive(wrapper) => execute_receive(deps, info, wrapper),
        ExecuteMsg::SetBridgeDelegate { chain_id, delegate } => {
            execute_set_bridge_delegate(deps, info, chain_id, delegate)
        }
        ExecuteMsg::SetDistributor {
            address,
            authorized,
        } => execute_set_distributor(deps, info, address, authorized),
        ExecuteMsg::SetEmissionRatio { ratio } => execute_set_emission_ratio(deps, info, ratio),
        ExecuteMsg::SetTrustedRemote { chain_id, remote } => {
            execute_set_trusted_remote(deps, info, chain_id, remote)
        }
        ExecuteMsg::SetTransport { transport } => execute_set_transport(deps, info, transport),
        ExecuteMsg::Withdraw { recipient, amount } => {
            execute_withdraw(deps, info, recipient, amount)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::FeeDebt { chain_id } => to_json_binary(&query_fee_debt(deps, chain_id)?),
        QueryMsg::BridgeDelegate { chain_id } => {
            to_json_binary(&query_bridge_delegate(deps, chain_id)?)
        }
        QueryMsg::IsDistributor { address } => {
            to_json_binary(&query_is_distributor(deps, address)?)
        }
        QueryMsg::TrustedRemote { chain_id } => {
            to_json_binary(&query_trusted_remote(deps, chain_id)?)
        }
        QueryMsg::TotalMinted {} => to_json_binary(&query_total_minted(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
