//! Mock staking registry exposing pool info by pool id.

use common::interfaces::{PoolInfoResponse, PoolLengthResponse, RegistryQueryMsg};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
};
use cw_multi_test::ContractWrapper;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct InstantiateMsg {
    pub gauges: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    AddPool { gauge: String },
    Shutdown { pid: u64 },
}

const POOL_LENGTH: Item<u64> = Item::new("pool_length");
const POOLS: Map<u64, PoolInfoResponse> = Map::new("pools");

fn add_pool(deps: &mut DepsMut, gauge: String) -> StdResult<u64> {
    let pid = POOL_LENGTH.may_load(deps.storage)?.unwrap_or_default();
    POOLS.save(
        deps.storage,
        pid,
        &PoolInfoResponse {
            pid,
            gauge,
            shutdown: false,
        },
    )?;
    POOL_LENGTH.save(deps.storage, &(pid + 1))?;
    Ok(pid)
}

pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    POOL_LENGTH.save(deps.storage, &0)?;
    for gauge in msg.gauges {
        add_pool(&mut deps, gauge)?;
    }
    Ok(Response::new())
}

pub fn execute(
    mut deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::AddPool { gauge } => {
            let pid = add_pool(&mut deps, gauge)?;
            Ok(Response::new().add_attribute("pid", pid.to_string()))
        }
        ExecuteMsg::Shutdown { pid } => {
            POOLS.update(deps.storage, pid, |pool| -> StdResult<_> {
                let mut pool = pool.ok_or_else(|| cosmwasm_std::StdError::not_found("pool"))?;
                pool.shutdown = true;
                Ok(pool)
            })?;
            Ok(Response::new())
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: RegistryQueryMsg) -> StdResult<Binary> {
    match msg {
        RegistryQueryMsg::PoolLength {} => to_json_binary(&PoolLengthResponse {
            length: POOL_LENGTH.load(deps.storage)?,
        }),
        RegistryQueryMsg::PoolInfo { pid } => to_json_binary(&POOLS.load(deps.storage, pid)?),
    }
}

pub fn contract_registry() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
