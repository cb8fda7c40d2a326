use common::AssetInfo;
use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    ClaimableResponse, IsHarvesterResponse, RewardReceiverResponse, RewardTokenInfo,
    RewardTokensResponse, SupplyResponse, YieldConfigResponse,
};
use crate::state::{
    CLAIMABLE, HARVESTERS, INTERNAL_TOTAL_SUPPLY, REWARD_BRIDGES, REWARD_RECEIVERS,
    REWARD_TOKENS, TOTAL_CLAIMABLE, YIELD_CONFIG,
};

pub fn query_yield_config(deps: Deps) -> StdResult<YieldConfigResponse> {
    Ok(YieldConfigResponse {
        vault: YIELD_CONFIG.load(deps.storage)?.vault,
    })
}

pub fn query_internal_total_supply(deps: Deps) -> StdResult<SupplyResponse> {
    Ok(SupplyResponse {
        amount: INTERNAL_TOTAL_SUPPLY.load(deps.storage)?,
    })
}

pub fn query_claimable(deps: Deps, token: AssetInfo, chain_id: u64) -> StdResult<ClaimableResponse> {
    let key = token.key();
    Ok(ClaimableResponse {
        amount: CLAIMABLE
            .may_load(deps.storage, (key.as_str(), chain_id))?
            .unwrap_or_default(),
    })
}

pub fn query_total_claimable(deps: Deps, token: AssetInfo) -> StdResult<ClaimableResponse> {
    Ok(ClaimableResponse {
        amount: TOTAL_CLAIMABLE
            .may_load(deps.storage, &token.key())?
            .unwrap_or_default(),
    })
}

pub fn query_reward_receiver(deps: Deps, chain_id: u64) -> StdResult<RewardReceiverResponse> {
    Ok(RewardReceiverResponse {
        chain_id,
        receiver: REWARD_RECEIVERS.may_load(deps.storage, chain_id)?,
    })
}

pub fn query_is_harvester(deps: Deps, address: String) -> StdResult<IsHarvesterResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(IsHarvesterResponse {
        authorized: HARVESTERS
            .may_load(deps.storage, &address)?
            .unwrap_or(false),
    })
}

pub fn query_reward_tokens(deps: Deps) -> StdResult<RewardTokensResponse> {
    let tokens = REWARD_TOKENS
        .may_load(deps.storage)?
        .unwrap_or_default()
        .into_iter()
        .map(|token| {
            let bridge = REWARD_BRIDGES.may_load(deps.storage, &token.key())?;
            Ok(RewardTokenInfo { token, bridge })
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(RewardTokensResponse { tokens })
}
