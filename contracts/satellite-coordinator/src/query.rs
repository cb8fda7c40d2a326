use cosmwasm_std::{Deps, Env, StdError, StdResult, Uint128};

use crate::execute::emission_balance;
use crate::msg::{AccountingResponse, ConfigResponse, MintRateResponse, PreviewMintResponse};
use crate::rate::{payout, RATE_SCALE};
use crate::state::{ACCOUNTING, CONFIG, REMOTES};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let canonical_coordinator = REMOTES.trusted(deps.storage, config.canonical_chain_id)?;
    Ok(ConfigResponse {
        owner: config.owner,
        emission_token: config.emission_token,
        reward_registry: config.reward_registry,
        transport: config.transport,
        canonical_chain_id: config.canonical_chain_id,
        canonical_coordinator,
    })
}

pub fn query_mint_rate(deps: Deps) -> StdResult<MintRateResponse> {
    Ok(MintRateResponse {
        mint_rate: ACCOUNTING.load(deps.storage)?.mint_rate,
        scale: Uint128::new(RATE_SCALE),
    })
}

pub fn query_accounting(deps: Deps, env: Env) -> StdResult<AccountingResponse> {
    let config = CONFIG.load(deps.storage)?;
    let accounting = ACCOUNTING.load(deps.storage)?;
    let balance = emission_balance(&deps.querier, &config, &env.contract.address)?;
    let owed = payout(accounting.outstanding_basis(), accounting.mint_rate)
        .map_err(|err| StdError::generic_err(err.to_string()))?;

    Ok(AccountingResponse {
        reported_emission: accounting.reported_emission,
        covered_fees: accounting.covered_fees,
        paid_out: accounting.paid_out,
        fee_basis: accounting.fee_basis,
        claimed_basis: accounting.claimed_basis,
        fees_notified: accounting.fees_notified,
        mint_rate: accounting.mint_rate,
        balance,
        owed,
    })
}

pub fn query_preview_mint(deps: Deps, amount: Uint128) -> StdResult<PreviewMintResponse> {
    let accounting = ACCOUNTING.load(deps.storage)?;
    let emission = payout(amount, accounting.mint_rate)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    Ok(PreviewMintResponse { payout: emission })
}
