//! Yield-specific state. The lockbox configuration, ledgers and queue are
//! stored by the `lockbox` crate under its own keys.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use common::AssetInfo;

#[cw_serde]
pub struct YieldConfig {
    /// Vault holding the bridged asset
    pub vault: Addr,
}

pub const CONTRACT_NAME: &str = "crates.io:sidechain-yield-lockbox";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Harvest slippage is expressed in basis points of the realized amount
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const YIELD_CONFIG: Item<YieldConfig> = Item::new("yield_config");

/// Amount of the bridged asset represented on all satellite chains combined
pub const INTERNAL_TOTAL_SUPPLY: Item<Uint128> = Item::new("internal_total_supply");

/// Key: (token key, chain id), Value: yield waiting to be sent to that chain
pub const CLAIMABLE: Map<(&str, u64), Uint128> = Map::new("claimable");

/// Key: token key, Value: sum of CLAIMABLE over all chains
pub const TOTAL_CLAIMABLE: Map<&str, Uint128> = Map::new("total_claimable");

/// Key: chain id, Value: reward receiver on that chain
pub const REWARD_RECEIVERS: Map<u64, String> = Map::new("reward_receivers");

pub const HARVESTERS: Map<&Addr, bool> = Map::new("harvesters");

/// Extra reward tokens paid out by the vault on harvest
pub const REWARD_TOKENS: Item<Vec<AssetInfo>> = Item::new("reward_tokens");

/// Key: token key, Value: lockbox bridging that reward token
pub const REWARD_BRIDGES: Map<&str, Addr> = Map::new("reward_bridges");
