//! Mock stash reward distributor that records what each pool was funded with.

use common::interfaces::StashHookMsg;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    from_json, to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult, Uint128,
};
use cw20::Cw20ReceiveMsg;
use cw_multi_test::{App, ContractWrapper};
use cw_storage_plus::Map;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    Receive(Cw20ReceiveMsg),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(FundedResponse)]
    Funded { pool_id: u64 },
}

#[cw_serde]
pub struct FundedResponse {
    pub amount: Uint128,
    /// Periods requested by the most recent funding
    pub periods: u64,
    pub fundings: u64,
}

const FUNDED: Map<u64, FundedResponse> = Map::new("funded");

pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::new())
}

pub fn execute(deps: DepsMut, _env: Env, _info: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Receive(wrapper) => {
            let StashHookMsg::Fund { pool_id, periods } = from_json(&wrapper.msg)?;
            FUNDED.update(deps.storage, pool_id, |funded| -> StdResult<_> {
                let mut funded = funded.unwrap_or(FundedResponse {
                    amount: Uint128::zero(),
                    periods,
                    fundings: 0,
                });
                funded.amount += wrapper.amount;
                funded.periods = periods;
                funded.fundings += 1;
                Ok(funded)
            })?;
            Ok(Response::new()
                .add_attribute("action", "stash_fund")
                .add_attribute("pool_id", pool_id.to_string()))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Funded { pool_id } => to_json_binary(
            &FUNDED
                .may_load(deps.storage, pool_id)?
                .unwrap_or(FundedResponse {
                    amount: Uint128::zero(),
                    periods: 0,
                    fundings: 0,
                }),
        ),
    }
}

pub fn contract_stash() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}

pub fn funded(app: &App, stash: &cosmwasm_std::Addr, pool_id: u64) -> FundedResponse {
    app.wrap()
        .query_wasm_smart(stash, &QueryMsg::Funded { pool_id })
        .unwrap()
}
