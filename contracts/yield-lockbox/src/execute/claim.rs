use common::message::BridgePayload;
use common::transport::send_msg;
use common::{AssetInfo, AssetKind};
use cosmwasm_std::{DepsMut, Response};
use lockbox::msg::bridge_out_msg;
use lockbox::state::{CONFIG, REMOTES};

use crate::error::ContractError;
use crate::state::{
    CLAIMABLE, INTERNAL_TOTAL_SUPPLY, REWARD_BRIDGES, REWARD_RECEIVERS, TOTAL_CLAIMABLE,
};

/// Send the claimable `token` of `chain_id` to that chain's reward receiver.
///
/// Fails closed when the receiver (or, for extra reward tokens, the token's
/// bridge) is not configured.
pub fn execute_process_claimable(
    deps: DepsMut,
    token: AssetInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    let receiver = REWARD_RECEIVERS
        .may_load(deps.storage, chain_id)?
        .ok_or(ContractError::ReceiverNotConfigured { chain_id })?;

    let key = token.key();
    let amount = CLAIMABLE
        .may_load(deps.storage, (key.as_str(), chain_id))?
        .unwrap_or_default();
    if amount.is_zero() {
        return Err(ContractError::NothingClaimable {
            token: key,
            chain_id,
        });
    }

    CLAIMABLE.remove(deps.storage, (key.as_str(), chain_id));
    let total = TOTAL_CLAIMABLE.load(deps.storage, &key)?;
    TOTAL_CLAIMABLE.save(deps.storage, &key, &total.checked_sub(amount)?)?;

    let msg = match token.classify(&config.asset) {
        AssetKind::Bridged => {
            // Minting the yield on the satellite makes it part of the bridged supply
            let supply = INTERNAL_TOTAL_SUPPLY.load(deps.storage)?;
            INTERNAL_TOTAL_SUPPLY.save(deps.storage, &supply.checked_add(amount)?)?;

            let remote = REMOTES.trusted(deps.storage, chain_id)?.ok_or(
                lockbox::ContractError::RemoteNotConfigured { chain_id },
            )?;
            send_msg(
                &config.transport,
                chain_id,
                &remote,
                &BridgePayload::Credit {
                    recipient: receiver.clone(),
                    amount,
                },
            )?
        }
        AssetKind::Foreign(token) => {
            let bridge = REWARD_BRIDGES.may_load(deps.storage, &key)?.ok_or(
                ContractError::InvalidConfig {
                    reason: format!("no bridge configured for reward token {}", key),
                },
            )?;
            bridge_out_msg(&bridge, &token, chain_id, &receiver, amount)?
        }
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "process_claimable")
        .add_attribute("token", key)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount.to_string()))
}
