//! Execute handlers for the canonical coordinator

use common::asset::sole_coin_amount;
use common::message::CoordinatorPayload;
use common::transport::send_msg;
use common::{AssetInfo, InboundMessage};
use cosmwasm_std::{
    from_json, to_json_binary, Binary, CosmosMsg, Decimal, DepsMut, Env, MessageInfo, Response,
    StdResult, Storage, Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};
use lockbox::msg::bridge_out_msg;

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{Config, BRIDGE_DELEGATES, CONFIG, DISTRIBUTORS, FEE_DEBT, REMOTES, TOTAL_MINTED};

/// Emission owed for `fee_amount` of fee debt, rounded down
pub fn emission_for(fee_amount: Uint128, ratio: Decimal) -> Result<Uint128, ContractError> {
    Ok(fee_amount.checked_multiply_ratio(ratio.atomics(), Decimal::one().atomics())?)
}

// ============================================================================
// Emission
// ============================================================================

pub fn execute_distribute_emission(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dest_chain_id: u64,
    fee_amount: Option<Uint128>,
    extra_payload: Option<Binary>,
) -> Result<Response, ContractError> {
    if !DISTRIBUTORS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false)
    {
        return Err(ContractError::UnauthorizedDistributor);
    }

    let config = CONFIG.load(deps.storage)?;

    // Fail closed before minting anything the chain cannot settle against
    if !BRIDGE_DELEGATES.has(deps.storage, dest_chain_id) {
        return Err(ContractError::BridgeDelegateNotConfigured {
            chain_id: dest_chain_id,
        });
    }
    let satellite = REMOTES
        .trusted(deps.storage, dest_chain_id)?
        .ok_or(ContractError::RemoteNotConfigured {
            chain_id: dest_chain_id,
        })?;

    let mut debt = FEE_DEBT
        .may_load(deps.storage, dest_chain_id)?
        .unwrap_or_default();
    let available = debt.undistributed();
    let fee_amount = fee_amount.unwrap_or(available);
    if fee_amount.is_zero() || fee_amount > available {
        return Err(ContractError::InsufficientFeeDebt {
            chain_id: dest_chain_id,
            requested: fee_amount.to_string(),
            available: available.to_string(),
        });
    }

    let emission = emission_for(fee_amount, config.emission_ratio)?;
    if emission.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "fee amount is too small to mint any emission".to_string(),
        });
    }

    debt.distributed = debt.distributed.checked_add(fee_amount)?;
    FEE_DEBT.save(deps.storage, dest_chain_id, &debt)?;
    TOTAL_MINTED.update(deps.storage, |total| -> StdResult<_> {
        Ok(total.checked_add(emission)?)
    })?;

    let mint = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.emission_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: env.contract.address.to_string(),
            amount: emission,
        })?,
        funds: vec![],
    });
    let bridge = bridge_out_msg(
        &config.emission_lockbox,
        &AssetInfo::cw20(config.emission_token.clone()),
        dest_chain_id,
        &satellite,
        emission,
    )?;
    let notice = send_msg(
        &config.transport,
        dest_chain_id,
        &satellite,
        &CoordinatorPayload::EmissionDistributed {
            emission_amount: emission,
            fee_amount,
            extra_payload,
        },
    )?;

    Ok(Response::new()
        .add_message(mint)
        .add_message(bridge)
        .add_message(notice)
        .add_attribute("method", "distribute_emission")
        .add_attribute("chain_id", dest_chain_id.to_string())
        .add_attribute("fee_amount", fee_amount.to_string())
        .add_attribute("emission_amount", emission.to_string())
        .add_attribute("distributed_fee_debt", debt.distributed.to_string()))
}

pub fn execute_receive_message(
    deps: DepsMut,
    info: MessageInfo,
    msg: InboundMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    REMOTES.accept(deps.storage, &config.transport, &info.sender, &msg)?;

    let amount = match msg.decode::<CoordinatorPayload>()? {
        CoordinatorPayload::NotifyFees { amount } => amount,
        CoordinatorPayload::EmissionDistributed { .. } => {
            return Err(ContractError::UnexpectedPayload {
                reason: "emission notices are only accepted by satellites".to_string(),
            })
        }
    };

    let mut debt = FEE_DEBT
        .may_load(deps.storage, msg.src_chain_id)?
        .unwrap_or_default();
    debt.fee_debt = debt.fee_debt.checked_add(amount)?;
    FEE_DEBT.save(deps.storage, msg.src_chain_id, &debt)?;

    Ok(Response::new()
        .add_attribute("method", "notify_fees")
        .add_attribute("chain_id", msg.src_chain_id.to_string())
        .add_attribute("nonce", msg.nonce.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("fee_debt", debt.fee_debt.to_string()))
}

// ============================================================================
// Settlement
// ============================================================================

pub fn execute_settle_native(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let denom = match &config.fee_asset {
        AssetInfo::Native { denom } => denom,
        AssetInfo::Cw20 { .. } => {
            return Err(ContractError::WrongAsset {
                expected: format!("{} via CW20 send", config.fee_asset),
            })
        }
    };
    let amount = sole_coin_amount(&info.funds, denom).ok_or(ContractError::WrongAsset {
        expected: format!("exactly one coin of {}", denom),
    })?;

    settle(deps.storage, info.sender.as_str(), chain_id, amount)
}

pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.fee_asset != AssetInfo::cw20(info.sender.clone()) {
        return Err(ContractError::WrongAsset {
            expected: config.fee_asset.to_string(),
        });
    }

    match from_json(&wrapper.msg)? {
        ReceiveMsg::SettleFeeDebt { chain_id } => {
            settle(deps.storage, &wrapper.sender, chain_id, wrapper.amount)
        }
    }
}

fn settle(
    storage: &mut dyn Storage,
    sender: &str,
    chain_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let delegate = BRIDGE_DELEGATES.may_load(storage, chain_id)?;
    if delegate.as_ref().map(|d| d.as_str()) != Some(sender) {
        return Err(ContractError::UnauthorizedDelegate { chain_id });
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    let mut debt = FEE_DEBT.may_load(storage, chain_id)?.unwrap_or_default();
    debt.settled = debt.settled.checked_add(amount)?;
    FEE_DEBT.save(storage, chain_id, &debt)?;

    Ok(Response::new()
        .add_attribute("method", "settle_fee_debt")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("settled_fee_debt", debt.settled.to_string()))
}

// ============================================================================
// Configuration
// ============================================================================

fn load_as_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

pub fn execute_set_bridge_delegate(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    delegate: String,
) -> Result<Response, ContractError> {
    load_as_owner(deps.storage, &info)?;
    let delegate = deps.api.addr_validate(&delegate)?;
    BRIDGE_DELEGATES.save(deps.storage, chain_id, &delegate)?;

    Ok(Response::new()
        .add_attribute("method", "set_bridge_delegate")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("delegate", delegate))
}

pub fn execute_set_distributor(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    load_as_owner(deps.storage, &info)?;
    let address = deps.api.addr_validate(&address)?;
    if authorized {
        DISTRIBUTORS.save(deps.storage, &address, &true)?;
    } else {
        DISTRIBUTORS.remove(deps.storage, &address);
    }

    Ok(Response::new()
        .add_attribute("method", "set_distributor")
        .add_attribute("address", address)
        .add_attribute("authorized", authorized.to_string()))
}

pub fn execute_set_emission_ratio(
    deps: DepsMut,
    info: MessageInfo,
    ratio: Decimal,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;
    if ratio.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "emission ratio must be greater than zero".to_string(),
        });
    }
    config.emission_ratio = ratio;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_emission_ratio")
        .add_attribute("ratio", ratio.to_string()))
}

pub fn execute_set_trusted_remote(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    remote: String,
) -> Result<Response, ContractError> {
    load_as_owner(deps.storage, &info)?;
    if remote.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "remote must not be empty".to_string(),
        });
    }
    REMOTES.set_trusted(deps.storage, chain_id, &remote)?;

    Ok(Response::new()
        .add_attribute("method", "set_trusted_remote")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("remote", remote))
}

pub fn execute_set_transport(
    deps: DepsMut,
    info: MessageInfo,
    transport: String,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;
    config.transport = deps.api.addr_validate(&transport)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_transport")
        .add_attribute("transport", transport))
}

pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_as_owner(deps.storage, &info)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    Ok(Response::new()
        .add_message(config.fee_asset.transfer_msg(recipient.as_str(), amount)?)
        .add_attribute("method", "withdraw")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_emission_for_rounds_down() {
        let ratio = Decimal::from_str("1.5").unwrap();
        assert_eq!(emission_for(Uint128::new(3), ratio).unwrap(), Uint128::new(4));
        assert_eq!(emission_for(Uint128::new(100), ratio).unwrap(), Uint128::new(150));

        let ratio = Decimal::from_str("0.3").unwrap();
        assert_eq!(emission_for(Uint128::new(3), ratio).unwrap(), Uint128::zero());
    }

    #[test]
    fn test_undistributed_never_underflows() {
        let debt = crate::state::FeeDebt {
            fee_debt: Uint128::new(10),
            distributed: Uint128::new(10),
            settled: Uint128::zero(),
        };
        assert_eq!(debt.undistributed(), Uint128::zero());
    }
}
