use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    BridgeDelegateResponse, ConfigResponse, FeeDebtResponse, IsDistributorResponse,
    TotalMintedResponse, TrustedRemoteResponse,
};
use crate::state::{BRIDGE_DELEGATES, CONFIG, DISTRIBUTORS, FEE_DEBT, REMOTES, TOTAL_MINTED};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        emission_token: config.emission_token,
        emission_lockbox: config.emission_lockbox,
        fee_asset: config.fee_asset,
        transport: config.transport,
        emission_ratio: config.emission_ratio,
    })
}

pub fn query_fee_debt(deps: Deps, chain_id: u64) -> StdResult<FeeDebtResponse> {
    let debt = FEE_DEBT.may_load(deps.storage, chain_id)?.unwrap_or_default();
    Ok(FeeDebtResponse {
        chain_id,
        fee_debt: debt.fee_debt,
        distributed_fee_debt: debt.distributed,
        settled_fee_debt: debt.settled,
    })
}

pub fn query_bridge_delegate(deps: Deps, chain_id: u64) -> StdResult<BridgeDelegateResponse> {
    Ok(BridgeDelegateResponse {
        chain_id,
        delegate: BRIDGE_DELEGATES.may_load(deps.storage, chain_id)?,
    })
}

pub fn query_is_distributor(deps: Deps, address: String) -> StdResult<IsDistributorResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(IsDistributorResponse {
        authorized: DISTRIBUTORS
            .may_load(deps.storage, &address)?
            .unwrap_or(false),
    })
}

pub fn query_trusted_remote(deps: Deps, chain_id: u64) -> StdResult<TrustedRemoteResponse> {
    Ok(TrustedRemoteResponse {
        chain_id,
        remote: REMOTES.trusted(deps.storage, chain_id)?,
    })
}

pub fn query_total_minted(deps: Deps) -> StdResult<TotalMintedResponse> {
    Ok(TotalMintedResponse {
        amount: TOTAL_MINTED.load(deps.storage)?,
    })
}
