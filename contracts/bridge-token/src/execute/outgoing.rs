use common::message::BridgePayload;
use common::transport::send_msg;
use common::{epoch_of, Direction};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, FLOWS, REMOTES, STATS};

/// Burn from the caller and send a credit to the canonical lockbox.
///
/// Outflow is recorded for reporting; the limit is enforced by the lockbox on
/// arrival.
pub fn execute_bridge_out(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
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

    let lockbox = REMOTES
        .trusted(deps.storage, config.canonical_chain_id)?
        .ok_or(ContractError::RemoteNotConfigured {
            chain_id: config.canonical_chain_id,
        })?;

    cw20_base::contract::execute_burn(deps.branch(), env.clone(), info.clone(), amount)?;

    let epoch = epoch_of(env.block.time.seconds(), config.epoch_duration);
    FLOWS.record(
        deps.storage,
        Direction::Outbound,
        epoch,
        amount,
        Uint128::MAX,
    )?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_bridged_out += 1;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_message(send_msg(
            &config.transport,
            config.canonical_chain_id,
            &lockbox,
            &BridgePayload::Credit {
                recipient: recipient.clone(),
                amount,
            },
        )?)
        .add_attribute("method", "bridge_out")
        .add_attribute("sender", info.sender)
        .add_attribute("dest_chain_id", config.canonical_chain_id.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("epoch", epoch.to_string()))
}
