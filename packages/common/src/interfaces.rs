//! Interfaces of the external collaborators.
//!
//! These contracts are not part of the workspace; only the messages the core
//! sends to them and the queries it makes are defined here.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

// ============================================================================
// Yield vault
// ============================================================================

#[cw_serde]
pub enum VaultExecuteMsg {
    /// Realize pending yield into the vault's accounting
    Harvest { min_out_bps: u64 },
    /// Withdraw `amount` of underlying to `recipient`
    WithdrawUnderlying { amount: Uint128, recipient: String },
}

/// CW20 send hook accepted by the vault
#[cw_serde]
pub enum VaultHookMsg {
    Deposit {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum VaultQueryMsg {
    #[returns(UnderlyingBalanceResponse)]
    BalanceOfUnderlying { holder: String },
}

#[cw_serde]
pub struct UnderlyingBalanceResponse {
    pub amount: Uint128,
}

// ============================================================================
// Staking / reward-pool registry
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum RegistryQueryMsg {
    #[returns(PoolLengthResponse)]
    PoolLength {},
    #[returns(PoolInfoResponse)]
    PoolInfo { pid: u64 },
}

#[cw_serde]
pub struct PoolLengthResponse {
    pub length: u64,
}

#[cw_serde]
pub struct PoolInfoResponse {
    pub pid: u64,
    pub gauge: String,
    pub shutdown: bool,
}

/// Pools `start..end` of the registry, clamped to its pool count.
pub fn registry_pools(
    querier: &QuerierWrapper,
    registry: &Addr,
    start: u64,
    end: u64,
) -> StdResult<Vec<PoolInfoResponse>> {
    let length: PoolLengthResponse =
        querier.query_wasm_smart(registry, &RegistryQueryMsg::PoolLength {})?;
    (start..end.min(length.length))
        .map(|pid| querier.query_wasm_smart(registry, &RegistryQueryMsg::PoolInfo { pid }))
        .collect()
}

// ============================================================================
// Stash reward distributor
// ============================================================================

/// CW20 send hook accepted by the stash reward distributor
#[cw_serde]
pub enum StashHookMsg {
    /// Fund pool `pool_id` with the sent amount, spread over `periods` epochs
    Fund { pool_id: u64, periods: u64 },
}

/// Send `amount` of the CW20 `token` to `stash` as funding for `pool_id`.
pub fn fund_msg(
    token: &Addr,
    stash: &Addr,
    pool_id: u64,
    periods: u64,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Send {
            contract: stash.to_string(),
            amount,
            msg: to_json_binary(&StashHookMsg::Fund { pool_id, periods })?,
        })?,
        funds: vec![],
    }))
}

// ============================================================================
// Gauge voter
// ============================================================================

#[cw_serde]
pub enum GaugeVoterExecuteMsg {
    VoteGaugeWeight { gauges: Vec<String>, weights: Vec<u64> },
}
