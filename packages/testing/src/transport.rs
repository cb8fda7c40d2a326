//! Mock messaging transport endpoint.
//!
//! One endpoint is instantiated per chain. `Send` records a packet in the
//! outbox with a nonce unique to the sending endpoint. Delivering a packet
//! hands it to the peer endpoint of the destination chain, which calls
//! `ReceiveMessage` on the destination contract. Only a registered peer may
//! ask an endpoint to relay, so the endpoint address is a sound caller check
//! for receivers.

use common::InboundMessage;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Empty, Env, MessageInfo, Order,
    Response, StdError, StdResult, Storage, WasmMsg,
};
use cw_multi_test::{App, ContractWrapper, Executor};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct InstantiateMsg {
    pub chain_id: u64,
    /// Relay every packet in the same transaction it is sent
    pub auto_deliver: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Same shape as `common::TransportExecuteMsg::Send`
    Send {
        dest_chain_id: u64,
        dest_contract: String,
        payload: Binary,
    },
    SetPeer { chain_id: u64, endpoint: String },
    SetAutoDeliver { auto_deliver: bool },
    /// Deliver one undelivered packet
    Deliver { seq: u64 },
    /// Deliver every undelivered packet in sequence order
    DeliverAll {},
    /// Deliver a packet again, even if already delivered
    Redeliver { seq: u64 },
    /// Called by a peer endpoint to hand over a packet
    Relay {
        dest_contract: String,
        message: InboundMessage,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Packet)]
    Packet { seq: u64 },
    #[returns(PendingResponse)]
    Pending {},
}

#[cw_serde]
pub struct Packet {
    pub seq: u64,
    pub dest_chain_id: u64,
    pub dest_contract: String,
    pub message: InboundMessage,
    pub delivered: bool,
}

#[cw_serde]
pub struct PendingResponse {
    pub seqs: Vec<u64>,
}

/// Envelope every receiving contract accepts
#[cw_serde]
enum ReceiverMsg {
    ReceiveMessage(InboundMessage),
}

#[cw_serde]
struct State {
    chain_id: u64,
    auto_deliver: bool,
    next_seq: u64,
}

const STATE: Item<State> = Item::new("state");
const PEERS: Map<u64, Addr> = Map::new("peers");
const OUTBOX: Map<u64, Packet> = Map::new("outbox");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    STATE.save(
        deps.storage,
        &State {
            chain_id: msg.chain_id,
            auto_deliver: msg.auto_deliver,
            next_seq: 1,
        },
    )?;
    Ok(Response::new())
}

pub fn execute(deps: DepsMut, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Send {
            dest_chain_id,
            dest_contract,
            payload,
        } => {
            let mut state = STATE.load(deps.storage)?;
            let seq = state.next_seq;
            state.next_seq += 1;
            STATE.save(deps.storage, &state)?;

            let packet = Packet {
                seq,
                dest_chain_id,
                dest_contract,
                message: InboundMessage {
                    src_chain_id: state.chain_id,
                    src_contract: info.sender.to_string(),
                    nonce: seq,
                    payload,
                },
                delivered: state.auto_deliver,
            };
            OUTBOX.save(deps.storage, seq, &packet)?;

            let mut response = Response::new()
                .add_attribute("action", "transport_send")
                .add_attribute("seq", seq.to_string());
            if state.auto_deliver {
                response = response.add_message(relay_msg(deps.storage, &packet)?);
            }
            Ok(response)
        }
        ExecuteMsg::SetPeer { chain_id, endpoint } => {
            let endpoint = deps.api.addr_validate(&endpoint)?;
            PEERS.save(deps.storage, chain_id, &endpoint)?;
            Ok(Response::new())
        }
        ExecuteMsg::SetAutoDeliver { auto_deliver } => {
            STATE.update(deps.storage, |mut state| -> StdResult<_> {
                state.auto_deliver = auto_deliver;
                Ok(state)
            })?;
            Ok(Response::new())
        }
        ExecuteMsg::Deliver { seq } => {
            let mut packet = OUTBOX.load(deps.storage, seq)?;
            if packet.delivered {
                return Err(StdError::generic_err(format!("packet {} already delivered", seq)));
            }
            packet.delivered = true;
            OUTBOX.save(deps.storage, seq, &packet)?;
            Ok(Response::new().add_message(relay_msg(deps.storage, &packet)?))
        }
        ExecuteMsg::DeliverAll {} => {
            let pending: Vec<Packet> = OUTBOX
                .range(deps.storage, None, None, Order::Ascending)
                .filter_map(|item| match item {
                    Ok((_, packet)) if packet.delivered => None,
                    other => Some(other.map(|(_, packet)| packet)),
                })
                .collect::<StdResult<_>>()?;

            let mut msgs = Vec::with_capacity(pending.len());
            for mut packet in pending {
                packet.delivered = true;
                OUTBOX.save(deps.storage, packet.seq, &packet)?;
                msgs.push(relay_msg(deps.storage, &packet)?);
            }
            Ok(Response::new().add_messages(msgs))
        }
        ExecuteMsg::Redeliver { seq } => {
            let packet = OUTBOX.load(deps.storage, seq)?;
            Ok(Response::new().add_message(relay_msg(deps.storage, &packet)?))
        }
        ExecuteMsg::Relay {
            dest_contract,
            message,
        } => {
            let peer = PEERS.may_load(deps.storage, message.src_chain_id)?;
            if peer.as_ref() != Some(&info.sender) {
                return Err(StdError::generic_err("relay caller is not a registered peer"));
            }
            Ok(Response::new().add_message(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: dest_contract,
                msg: to_json_binary(&ReceiverMsg::ReceiveMessage(message))?,
                funds: vec![],
            })))
        }
    }
}

fn relay_msg(storage: &dyn Storage, packet: &Packet) -> StdResult<CosmosMsg> {
    let peer = PEERS
        .may_load(storage, packet.dest_chain_id)?
        .ok_or_else(|| {
            StdError::generic_err(format!("no peer for chain {}", packet.dest_chain_id))
        })?;
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: peer.to_string(),
        msg: to_json_binary(&ExecuteMsg::Relay {
            dest_contract: packet.dest_contract.clone(),
            message: packet.message.clone(),
        })?,
        funds: vec![],
    }))
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Packet { seq } => to_json_binary(&OUTBOX.load(deps.storage, seq)?),
        QueryMsg::Pending {} => {
            let seqs = OUTBOX
                .range(deps.storage, None, None, Order::Ascending)
                .filter_map(|item| match item {
                    Ok((seq, packet)) if !packet.delivered => Some(Ok(seq)),
                    Ok(_) => None,
                    Err(err) => Some(Err(err)),
                })
                .collect::<StdResult<_>>()?;
            to_json_binary(&PendingResponse { seqs })
        }
    }
}

pub fn contract_transport() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}

// ============================================================================
// Helpers
// ============================================================================

/// One endpoint per chain in `chain_ids`, every pair registered as peers.
pub fn mesh(app: &mut App, admin: &Addr, chain_ids: &[u64]) -> Vec<Addr> {
    let code_id = app.store_code(contract_transport());
    let endpoints: Vec<Addr> = chain_ids
        .iter()
        .map(|chain_id| {
            app.instantiate_contract(
                code_id,
                admin.clone(),
                &InstantiateMsg {
                    chain_id: *chain_id,
                    auto_deliver: false,
                },
                &[],
                format!("transport-{}", chain_id),
                None,
            )
            .unwrap()
        })
        .collect();

    for from in &endpoints {
        for (to, chain_id) in endpoints.iter().zip(chain_ids) {
            if to == from {
                continue;
            }
            app.execute_contract(
                admin.clone(),
                from.clone(),
                &ExecuteMsg::SetPeer {
                    chain_id: *chain_id,
                    endpoint: to.to_string(),
                },
                &[],
            )
            .unwrap();
        }
    }

    endpoints
}

/// Deliver everything pending on `endpoint`.
pub fn deliver_all(app: &mut App, endpoint: &Addr) -> cw_multi_test::AppResponse {
    app.execute_contract(
        Addr::unchecked("relayer"),
        endpoint.clone(),
        &ExecuteMsg::DeliverAll {},
        &[],
    )
    .unwrap()
}

pub fn pending(app: &App, endpoint: &Addr) -> Vec<u64> {
    let res: PendingResponse = app
        .wrap()
        .query_wasm_smart(endpoint, &QueryMsg::Pending {})
        .unwrap();
    res.seqs
}
