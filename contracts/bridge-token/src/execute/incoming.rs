use common::flow::queue_key;
use common::message::BridgePayload;
use common::{epoch_of, Admission, Direction, InboundMessage, QueuedTransfer};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, FLOWS, REMOTES, STATS};

/// Mint `amount` to `recipient` with the contract as minter.
fn mint(
    deps: DepsMut,
    env: &Env,
    recipient: &str,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let minter = MessageInfo {
        sender: env.contract.address.clone(),
        funds: vec![],
    };
    Ok(cw20_base::contract::execute_mint(
        deps,
        env.clone(),
        minter,
        recipient.to_string(),
        amount,
    )?)
}

/// Credit from the canonical lockbox, delivered by the transport endpoint
pub fn execute_receive_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
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

    let response = match admission {
        Admission::Immediate => {
            STATS.save(deps.storage, &stats)?;
            mint(deps, &env, recipient.as_str(), amount)?.add_attribute("status", "minted")
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
            STATS.save(deps.storage, &stats)?;
            Response::new()
                .add_attribute("status", "queued")
                .add_attribute("queue_hash", format!("0x{}", hex::encode(hash)))
                .add_attribute(
                    "matures_at",
                    now.saturating_add(config.queue_delay).to_string(),
                )
        }
    };

    Ok(response
        .add_attribute("method", "receive_credit")
        .add_attribute("src_chain_id", msg.src_chain_id.to_string())
        .add_attribute("nonce", msg.nonce.to_string())
        .add_attribute("epoch", epoch.to_string()))
}

/// Mint a matured queued credit
#[allow(clippy::too_many_arguments)]
pub fn execute_process_queued(
    deps: DepsMut,
    env: Env,
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

    // Only credits are queued here
    let key = queue_key(
        Direction::Inbound,
        epoch,
        chain_id,
        &recipient,
        amount,
        queued_at,
    );
    let transfer = FLOWS
        .queued(deps.storage, &key)?
        .ok_or(ContractError::UnknownQueuedTransfer)?;

    let now = env.block.time.seconds();
    if !transfer.is_matured(config.queue_delay, now) {
        return Err(ContractError::QueueDelayNotElapsed {
            remaining_seconds: transfer.remaining(config.queue_delay, now),
        });
    }

    FLOWS.take(deps.storage, &key)?;
    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_processed += 1;
        Ok(stats)
    })?;

    Ok(mint(deps, &env, &recipient, amount)?
        .add_attribute("method", "process_queued")
        .add_attribute("queue_hash", format!("0x{}", hex::encode(key))))
}
