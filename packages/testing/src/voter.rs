//! Mock gauge voter that records the latest vote of each caller.

use common::interfaces::GaugeVoterExecuteMsg;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
};
use cw_multi_test::ContractWrapper;
use cw_storage_plus::Map;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(VoteResponse)]
    LastVote { voter: String },
}

#[cw_serde]
pub struct VoteResponse {
    pub gauges: Vec<String>,
    pub weights: Vec<u64>,
}

const VOTES: Map<String, VoteResponse> = Map::new("votes");

pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: GaugeVoterExecuteMsg,
) -> StdResult<Response> {
    match msg {
        GaugeVoterExecuteMsg::VoteGaugeWeight { gauges, weights } => {
            VOTES.save(
                deps.storage,
                info.sender.to_string(),
                &VoteResponse { gauges, weights },
            )?;
            Ok(Response::new().add_attribute("action", "gauge_vote"))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::LastVote { voter } => to_json_binary(
            &VOTES
                .may_load(deps.storage, voter)?
                .unwrap_or(VoteResponse {
                    gauges: vec![],
                    weights: vec![],
                }),
        ),
    }
}

pub fn contract_voter() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
