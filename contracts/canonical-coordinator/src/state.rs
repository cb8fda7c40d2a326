//! State definitions for the canonical coordinator

use common::{AssetInfo, Remotes};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// CW20 emission token; this contract must be its minter
    pub emission_token: Addr,
    /// Canonical lockbox bridging the emission token
    pub emission_lockbox: Addr,
    /// Asset the bridge delegates settle fee debt in
    pub fee_asset: AssetInfo,
    /// Local messaging transport endpoint
    pub transport: Addr,
    /// Emission minted per unit of fee debt
    pub emission_ratio: Decimal,
}

/// Per-chain fee debt ledger
#[cw_serde]
#[derive(Default)]
pub struct FeeDebt {
    /// Fees reported by the satellite
    pub fee_debt: Uint128,
    /// Fee debt already matched by minted emission
    pub distributed: Uint128,
    /// Fees physically delivered by the bridge delegate
    pub settled: Uint128,
}

impl FeeDebt {
    pub fn undistributed(&self) -> Uint128 {
        self.fee_debt.saturating_sub(self.distributed)
    }
}

pub const CONTRACT_NAME: &str = "crates.io:sidechain-canonical-coordinator";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: satellite chain id
pub const FEE_DEBT: Map<u64, FeeDebt> = Map::new("fee_debt");

/// Key: satellite chain id, Value: bridge delegate delivering that chain's fees
pub const BRIDGE_DELEGATES: Map<u64, Addr> = Map::new("bridge_delegates");

pub const DISTRIBUTORS: Map<&Addr, bool> = Map::new("distributors");

/// Total emission minted over the contract's lifetime
pub const TOTAL_MINTED: Item<Uint128> = Item::new("total_minted");

/// Satellite coordinators, one per chain
pub const REMOTES: Remotes = Remotes::new("remotes", "received_nonces");
