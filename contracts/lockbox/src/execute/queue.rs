//! Delay queue processing.

use common::message::BridgePayload;
use common::transport::send_msg;
use common::Direction;
use cosmwasm_std::{DepsMut, Env, Response, Uint128};

use crate::custody::Custody;
use crate::error::ContractError;
use crate::state::{CONFIG, FLOWS, REMOTES, STATS};

/// Execute a matured queued transfer. Anyone may call this.
///
/// The entry is identified by its content and direction; the same entry cannot
/// be processed twice because it is removed before the transfer executes.
#[allow(clippy::too_many_arguments)]
pub fn execute_process_queued<C: Custody>(
    deps: DepsMut,
    env: Env,
    custody: &C,
    epoch: u64,
    chain_id: u64,
    recipient: String,
    amount: Uint128,
    queued_at: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    let (key, transfer) = FLOWS
        .locate(deps.storage, epoch, chain_id, &recipient, amount, queued_at)?
        .ok_or(ContractError::UnknownQueuedTransfer)?;

    let now = env.block.time.seconds();
    if !transfer.is_matured(config.queue_delay, now) {
        return Err(ContractError::QueueDelayNotElapsed {
            remaining_seconds: transfer.remaining(config.queue_delay, now),
        });
    }

    FLOWS.take(deps.storage, &key)?;

    let msgs = match transfer.direction {
        Direction::Outbound => {
            let remote = REMOTES
                .trusted(deps.storage, chain_id)?
                .ok_or(ContractError::RemoteNotConfigured { chain_id })?;
            vec![send_msg(
                &config.transport,
                chain_id,
                &remote,
                &BridgePayload::Credit {
                    recipient: recipient.clone(),
                    amount,
                },
            )?]
        }
        Direction::Inbound => custody.release(deps.storage, &config, &recipient, amount)?,
    };

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_processed += 1;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("method", "process_queued")
        .add_attribute("queue_hash", format!("0x{}", hex::encode(key)))
        .add_attribute("direction", transfer.direction.as_str())
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}
