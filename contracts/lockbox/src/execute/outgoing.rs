//! Outgoing transfer handlers (BridgeOut and Receive).
//!
//! The asset is taken into custody first; the epoch outflow then decides
//! whether the credit is sent to the satellite now or parked in the queue.

use common::asset::sole_coin_amount;
use common::message::BridgePayload;
use common::transport::send_msg;
use common::{epoch_of, Admission, AssetInfo, Direction, QueuedTransfer};
use cosmwasm_std::{from_json, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;

use crate::custody::Custody;
use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{CONFIG, FLOWS, REMOTES, STATS};

/// Bridge native funds attached to the call
pub fn execute_bridge_out_native<C: Custody>(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    custody: &C,
    dest_chain_id: u64,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let denom = match &config.asset {
        AssetInfo::Native { denom } => denom.clone(),
        AssetInfo::Cw20 { .. } => {
            return Err(ContractError::WrongAsset {
                expected: format!("{} via CW20 send", config.asset),
            })
        }
    };

    let amount = sole_coin_amount(&info.funds, &denom).ok_or(ContractError::WrongAsset {
        expected: format!("exactly one coin of {}", denom),
    })?;

    bridge_out(
        deps,
        env,
        custody,
        info.sender.as_str(),
        dest_chain_id,
        recipient,
        amount,
    )
}

/// CW20 receive hook; only the bridged token contract may call it
pub fn execute_receive<C: Custody>(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    custody: &C,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    match &config.asset {
        AssetInfo::Cw20 { contract_addr } if *contract_addr == info.sender => {}
        _ => {
            return Err(ContractError::WrongAsset {
                expected: config.asset.to_string(),
            })
        }
    }

    let msg: ReceiveMsg = from_json(&wrapper.msg)?;
    match msg {
        ReceiveMsg::BridgeOut {
            dest_chain_id,
            recipient,
        } => bridge_out(
            deps,
            env,
            custody,
            &wrapper.sender,
            dest_chain_id,
            recipient,
            wrapper.amount,
        ),
    }
}

/// Escrow `amount` already received from `sender` and credit `recipient` on
/// `dest_chain_id`, subject to the epoch outflow limit.
pub fn bridge_out<C: Custody>(
    deps: DepsMut,
    env: Env,
    custody: &C,
    sender: &str,
    dest_chain_id: u64,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    if recipient.is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "recipient must not be empty".to_string(),
        });
    }

    let remote = REMOTES
        .trusted(deps.storage, dest_chain_id)?
        .ok_or(ContractError::RemoteNotConfigured {
            chain_id: dest_chain_id,
        })?;

    let escrow_msgs = custody.escrow(deps.storage, &config, amount)?;

    let now = env.block.time.seconds();
    let epoch = epoch_of(now, config.epoch_duration);
    let admission = FLOWS.record(
        deps.storage,
        Direction::Outbound,
        epoch,
        amount,
        config.inflow_limit,
    )?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_bridged_out += 1;

    let mut response = Response::new()
        .add_messages(escrow_msgs)
        .add_attribute("method", "bridge_out")
        .add_attribute("sender", sender)
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
        .add_attribute("recipient", &recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("epoch", epoch.to_string());

    match admission {
        Admission::Immediate => {
            response = response
                .add_message(send_msg(
                    &config.transport,
                    dest_chain_id,
                    &remote,
                    &BridgePayload::Credit { recipient, amount },
                )?)
                .add_attribute("status", "sent");
        }
        Admission::Queued => {
            let transfer = QueuedTransfer {
                direction: Direction::Outbound,
                epoch,
                chain_id: dest_chain_id,
                recipient,
                amount,
                queued_at: now,
            };
            let hash = FLOWS
                .enqueue(deps.storage, &transfer)?
                .ok_or(ContractError::TransferAlreadyQueued)?;
            stats.total_queued += 1;
            response = response
                .add_attribute("status", "queued")
                .add_attribute("queue_hash", format!("0x{}", hex::encode(hash)))
                .add_attribute(
                    "matures_at",
                    now.saturating_add(config.queue_delay).to_string(),
                );
        }
    }

    STATS.save(deps.storage, &stats)?;

    Ok(response)
}
