//! Incoming credit handler.

use common::message::BridgePayload;
use common::{epoch_of, Admission, Direction, InboundMessage, QueuedTransfer};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::custody::Custody;
use crate::error::ContractError;
use crate::state::{CONFIG, FLOWS, REMOTES, STATS};

/// Credit from a satellite bridge token, delivered by the transport endpoint
pub fn execute_receive_message<C: Custody>(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    custody: &C,
    msg: InboundMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    REMOTES.accept(deps.storage, &config.transport, &info.sender, &msg)?;

    let BridgePayload::Credit { recipient, amount } = msg.decode()?;
    let recipient = deps.api.addr_validate(&recipient)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "credit amount must be greater than zero".to_string(),
        });
    }

    let now = env.block.time.seconds();
    let epoch = epoch_of(now, config.epoch_duration);
    let admission = FLOWS.record(
        deps.storage,
        Direction::Inbound,
        epoch,
        amount,
        config.inflow_limit,
    )?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_received += 1;

    let mut response = Response::new()
        .add_attribute("method", "receive_credit")
        .add_attribute("src_chain_id", msg.src_chain_id.to_string())
        .add_attribute("nonce", msg.nonce.to_string())
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("amount", amount.to_string())
        .add_attribute("epoch", epoch.to_string());

    match admission {
        Admission::Immediate => {
            let release_msgs = custody.release(deps.storage, &config, recipient.as_str(), amount)?;
            response = response
                .add_messages(release_msgs)
                .add_attribute("status", "released");
        }
        Admission::Queued => {
            let transfer = QueuedTransfer {
                direction: Direction::Inbound,
                epoch,
                chain_id: msg.src_chain_id,
                recipient: recipient.to_string(),
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
