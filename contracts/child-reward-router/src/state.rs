//! State definitions for the child reward router

use common::Remotes;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Bridged reward token on this chain
    pub reward_token: Addr,
    pub stash: Addr,
    pub registry: Addr,
    pub transport: Addr,
    pub canonical_chain_id: u64,
    pub epoch_duration: u64,
    pub stash_periods: u64,
}

#[cw_serde]
pub struct Distribution {
    pub amount: Uint128,
    pub funded: bool,
}

/// Per-epoch tally of recorded and funded distributions
#[cw_serde]
#[derive(Default)]
pub struct EpochTally {
    pub gauges: u32,
    pub funded: u32,
    pub total: Uint128,
}

pub const CONTRACT_NAME: &str = "crates.io:sidechain-child-reward-router";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_STASH_PERIODS: u64 = 2;

pub const CONFIG: Item<Config> = Item::new("config");
pub const DISTRIBUTORS: Map<&Addr, bool> = Map::new("distributors");
pub const POOL_IDS: Map<&str, u64> = Map::new("pool_ids");
/// Key: (epoch, gauge)
pub const DISTRIBUTIONS: Map<(u64, &str), Distribution> = Map::new("distributions");
pub const EPOCHS: Map<u64, EpochTally> = Map::new("epochs");

/// Canonical reward router
pub const REMOTES: Remotes = Remotes::new("remotes", "received_nonces");
