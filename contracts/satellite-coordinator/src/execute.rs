//! Execute handlers for the satellite coordinator

use common::message::CoordinatorPayload;
use common::transport::send_msg;
use common::{AssetInfo, InboundMessage};
use cosmwasm_std::{
    Addr, DepsMut, Env, MessageInfo, QuerierWrapper, Response, StdResult, Storage, Uint128,
};

use crate::error::ContractError;
use crate::rate::{accumulated_emission, mint_rate, payout};
use crate::state::{Accounting, Config, ACCOUNTING, CONFIG, REMOTES};

pub fn emission_balance(
    querier: &QuerierWrapper,
    config: &Config,
    contract: &Addr,
) -> StdResult<Uint128> {
    AssetInfo::cw20(config.emission_token.clone()).query_balance(querier, contract)
}

/// Refresh `accounting.mint_rate` against `balance`
fn resync(accounting: &mut Accounting, balance: Uint128) -> Result<(), ContractError> {
    let accumulated =
        accumulated_emission(accounting.reported_emission, balance, accounting.paid_out);
    accounting.mint_rate = mint_rate(
        accumulated,
        accounting.fee_basis,
        balance,
        accounting.outstanding_basis(),
    )?;
    Ok(())
}

fn assert_registry(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.reward_registry {
        return Err(ContractError::UnauthorizedRegistry);
    }
    Ok(())
}

// ============================================================================
// Reward registry
// ============================================================================

pub fn execute_queue_new_rewards(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    fee_amount: Uint128,
    reward_amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_registry(&config, &info)?;

    if fee_amount.is_zero() && reward_amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "nothing to queue".to_string(),
        });
    }

    let mut accounting = ACCOUNTING.load(deps.storage)?;
    accounting.fee_basis = accounting.fee_basis.checked_add(reward_amount)?;
    accounting.fees_notified = accounting.fees_notified.checked_add(fee_amount)?;

    let balance = emission_balance(&deps.querier, &config, &env.contract.address)?;
    resync(&mut accounting, balance)?;
    ACCOUNTING.save(deps.storage, &accounting)?;

    let mut response = Response::new()
        .add_attribute("method", "queue_new_rewards")
        .add_attribute("fee_amount", fee_amount.to_string())
        .add_attribute("reward_amount", reward_amount.to_string())
        .add_attribute("mint_rate", accounting.mint_rate.to_string());

    if !fee_amount.is_zero() {
        let canonical = REMOTES
            .trusted(deps.storage, config.canonical_chain_id)?
            .ok_or(ContractError::RemoteNotConfigured {
                chain_id: config.canonical_chain_id,
            })?;
        response = response.add_message(send_msg(
            &config.transport,
            config.canonical_chain_id,
            &canonical,
            &CoordinatorPayload::NotifyFees { amount: fee_amount },
        )?);
    }

    Ok(response)
}

pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_registry(&config, &info)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let mut accounting = ACCOUNTING.load(deps.storage)?;
    if amount.is_zero() || amount > accounting.outstanding_basis() {
        return Err(ContractError::InvalidAmount {
            reason: format!(
                "{} exceeds the {} of queued rewards outstanding",
                amount,
                accounting.outstanding_basis()
            ),
        });
    }

    let emission = payout(amount, accounting.mint_rate)?;
    let balance = emission_balance(&deps.querier, &config, &env.contract.address)?;
    if emission > balance {
        return Err(ContractError::InsufficientEmission {
            requested: emission.to_string(),
            available: balance.to_string(),
        });
    }

    accounting.claimed_basis = accounting.claimed_basis.checked_add(amount)?;
    accounting.paid_out = accounting.paid_out.checked_add(emission)?;
    ACCOUNTING.save(deps.storage, &accounting)?;

    let mut response = Response::new()
        .add_attribute("method", "mint")
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("amount", amount.to_string())
        .add_attribute("emission", emission.to_string());

    // A lagging rate may pay nothing; CW20 rejects zero transfers
    if !emission.is_zero() {
        response = response.add_message(
            AssetInfo::cw20(config.emission_token).transfer_msg(recipient.as_str(), emission)?,
        );
    }

    Ok(response)
}

pub fn execute_sync_mint_rate(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut accounting = ACCOUNTING.load(deps.storage)?;
    let balance = emission_balance(&deps.querier, &config, &env.contract.address)?;
    resync(&mut accounting, balance)?;
    ACCOUNTING.save(deps.storage, &accounting)?;

    Ok(Response::new()
        .add_attribute("method", "sync_mint_rate")
        .add_attribute("balance", balance.to_string())
        .add_attribute("mint_rate", accounting.mint_rate.to_string()))
}

// ============================================================================
// Inbound
// ============================================================================

pub fn execute_receive_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InboundMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    REMOTES.accept(deps.storage, &config.transport, &info.sender, &msg)?;

    let (emission_amount, fee_amount, extra_payload) = match msg.decode::<CoordinatorPayload>()? {
        CoordinatorPayload::EmissionDistributed {
            emission_amount,
            fee_amount,
            extra_payload,
        } => (emission_amount, fee_amount, extra_payload),
        CoordinatorPayload::NotifyFees { .. } => {
            return Err(ContractError::UnexpectedPayload {
                reason: "fee notices are only accepted by the canonical coordinator".to_string(),
            })
        }
    };

    let mut accounting = ACCOUNTING.load(deps.storage)?;
    accounting.reported_emission = accounting.reported_emission.checked_add(emission_amount)?;
    accounting.covered_fees = accounting.covered_fees.checked_add(fee_amount)?;

    let balance = emission_balance(&deps.querier, &config, &env.contract.address)?;
    resync(&mut accounting, balance)?;
    ACCOUNTING.save(deps.storage, &accounting)?;

    let mut response = Response::new()
        .add_attribute("method", "emission_distributed")
        .add_attribute("nonce", msg.nonce.to_string())
        .add_attribute("emission_amount", emission_amount.to_string())
        .add_attribute("fee_amount", fee_amount.to_string())
        .add_attribute("mint_rate", accounting.mint_rate.to_string());
    if let Some(extra) = extra_payload {
        response = response.add_attribute("extra_payload", extra.to_base64());
    }

    Ok(response)
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

pub fn execute_set_reward_registry(
    deps: DepsMut,
    info: MessageInfo,
    registry: String,
) -> Result<Response, ContractError> {
    let mut config = load_as_owner(deps.storage, &info)?;
    config.reward_registry = deps.api.addr_validate(&registry)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_reward_registry")
        .add_attribute("registry", registry))
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
