//! Two-phase harvest: the vault realizes yield, then a self-callback
//! apportions what arrived.

use common::interfaces::{UnderlyingBalanceResponse, VaultExecuteMsg, VaultQueryMsg};
use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Storage, Uint128,
    WasmMsg,
};
use lockbox::state::CONFIG;

use crate::error::ContractError;
use crate::msg::{CallbackMsg, ExecuteMsg};
use crate::state::{
    BPS_DENOMINATOR, CLAIMABLE, HARVESTERS, INTERNAL_TOTAL_SUPPLY, REWARD_TOKENS,
    TOTAL_CLAIMABLE, YIELD_CONFIG,
};

/// Split `amount` by integer `weights`, rounding each share down.
///
/// The rounding dust stays unallocated and is picked up by the next harvest.
pub fn apportion(amount: Uint128, weights: &[u64]) -> Vec<Uint128> {
    let total: u128 = weights.iter().map(|w| *w as u128).sum();
    if total == 0 {
        return vec![Uint128::zero(); weights.len()];
    }
    weights
        .iter()
        .map(|w| amount.multiply_ratio(*w as u128, total))
        .collect()
}

fn validate_weights(chain_ids: &[u64], weights: &[u64]) -> Result<(), ContractError> {
    if chain_ids.is_empty() {
        return Err(ContractError::InvalidWeights {
            reason: "at least one destination chain is required".to_string(),
        });
    }
    if chain_ids.len() != weights.len() {
        return Err(ContractError::InvalidWeights {
            reason: format!(
                "{} chain ids but {} weights",
                chain_ids.len(),
                weights.len()
            ),
        });
    }
    if weights.iter().all(|w| *w == 0) {
        return Err(ContractError::InvalidWeights {
            reason: "weights must not all be zero".to_string(),
        });
    }
    Ok(())
}

pub fn execute_harvest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    weights: Vec<u64>,
    slippage_bps: u64,
) -> Result<Response, ContractError> {
    if !HARVESTERS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false)
    {
        return Err(ContractError::UnauthorizedHarvester);
    }

    validate_weights(&chain_ids, &weights)?;

    if slippage_bps > BPS_DENOMINATOR {
        return Err(ContractError::InvalidConfig {
            reason: format!("slippage cannot exceed {} bps", BPS_DENOMINATOR),
        });
    }

    let yield_config = YIELD_CONFIG.load(deps.storage)?;

    let harvest = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: yield_config.vault.to_string(),
        msg: to_json_binary(&VaultExecuteMsg::Harvest {
            min_out_bps: BPS_DENOMINATOR - slippage_bps,
        })?,
        funds: vec![],
    });
    let callback = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::Callback(CallbackMsg::DistributeHarvest {
            chain_ids,
            weights,
        }))?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(harvest)
        .add_message(callback)
        .add_attribute("method", "harvest")
        .add_attribute("harvester", info.sender)
        .add_attribute("slippage_bps", slippage_bps.to_string()))
}

fn credit_claimable(
    storage: &mut dyn Storage,
    token_key: &str,
    chain_ids: &[u64],
    shares: &[Uint128],
) -> Result<Uint128, ContractError> {
    let mut credited = Uint128::zero();
    for (chain_id, share) in chain_ids.iter().zip(shares) {
        if share.is_zero() {
            continue;
        }
        let current = CLAIMABLE
            .may_load(storage, (token_key, *chain_id))?
            .unwrap_or_default();
        CLAIMABLE.save(storage, (token_key, *chain_id), &current.checked_add(*share)?)?;
        credited = credited.checked_add(*share)?;
    }
    let total = TOTAL_CLAIMABLE
        .may_load(storage, token_key)?
        .unwrap_or_default();
    TOTAL_CLAIMABLE.save(storage, token_key, &total.checked_add(credited)?)?;
    Ok(credited)
}

/// Apportion newly realized yield. Only the contract itself may call this.
pub fn execute_distribute_harvest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    weights: Vec<u64>,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::UnauthorizedCallback);
    }

    let config = CONFIG.load(deps.storage)?;
    let yield_config = YIELD_CONFIG.load(deps.storage)?;

    let mut response = Response::new().add_attribute("method", "distribute_harvest");

    // Bridged asset: everything in the vault beyond what satellites hold and
    // what is already claimable.
    let underlying: UnderlyingBalanceResponse = deps.querier.query_wasm_smart(
        &yield_config.vault,
        &VaultQueryMsg::BalanceOfUnderlying {
            holder: env.contract.address.to_string(),
        },
    )?;
    let bridged_key = config.asset.key();
    let supply = INTERNAL_TOTAL_SUPPLY.load(deps.storage)?;
    let already_claimable = TOTAL_CLAIMABLE
        .may_load(deps.storage, &bridged_key)?
        .unwrap_or_default();
    let realized = underlying
        .amount
        .saturating_sub(supply)
        .saturating_sub(already_claimable);

    let shares = apportion(realized, &weights);
    let credited = credit_claimable(deps.storage, &bridged_key, &chain_ids, &shares)?;
    response = response
        .add_attribute("underlying", underlying.amount.to_string())
        .add_attribute(format!("yield_{}", bridged_key), credited.to_string());

    // Extra reward tokens now sitting on the contract
    for token in REWARD_TOKENS.may_load(deps.storage)?.unwrap_or_default() {
        let key = token.key();
        let balance = token.query_balance(&deps.querier, &env.contract.address)?;
        let already_claimable = TOTAL_CLAIMABLE
            .may_load(deps.storage, &key)?
            .unwrap_or_default();
        let realized = balance.saturating_sub(already_claimable);
        if realized.is_zero() {
            continue;
        }

        let shares = apportion(realized, &weights);
        let credited = credit_claimable(deps.storage, &key, &chain_ids, &shares)?;
        response = response.add_attribute(format!("yield_{}", key), credited.to_string());
    }

    Ok(response)
}
