//! State definitions for the reward router

use common::Remotes;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// CW20 reward token held by the router
    pub reward_token: Addr,
    /// Canonical lockbox bridging the reward token
    pub reward_lockbox: Addr,
    /// Stash reward distributor for gauges on this chain
    pub stash: Addr,
    /// Staking registry mapping pool ids to gauges
    pub registry: Addr,
    /// External gauge voter the vote is forwarded to
    pub voter: Option<Addr>,
    pub transport: Addr,
    /// Chain id of this chain; gauges mapped to it are funded locally
    pub chain_id: u64,
    pub epoch_duration: u64,
    /// Number of periods each stash funding is spread over
    pub stash_periods: u64,
    /// Reward budget of each voted epoch
    pub reward_per_epoch: Uint128,
}

/// Frozen result of one epoch's vote
#[cw_serde]
#[derive(Default)]
pub struct EpochRecord {
    /// Budget at vote time
    pub reward: Uint128,
    /// Sum of eligible weights
    pub total_weight: Uint128,
    /// Number of eligible gauges
    pub eligible: u32,
    /// Number of eligible gauges funded so far
    pub processed: u32,
}

/// Eligible weight of one gauge, frozen at vote time
#[cw_serde]
pub struct GaugeVote {
    pub weight: u64,
    pub dst_chain_id: u64,
}

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:sidechain-reward-router";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_STASH_PERIODS: u64 = 2;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const DISTRIBUTORS: Map<&Addr, bool> = Map::new("distributors");

/// Key: gauge, Value: pool id in the local registry
pub const POOL_IDS: Map<&str, u64> = Map::new("pool_ids");

/// Key: gauge, Value: chain whose stash funds it
pub const DST_CHAIN_IDS: Map<&str, u64> = Map::new("dst_chain_ids");

/// Gauges that never receive funding, whatever their weight
pub const NO_DEPOSIT_GAUGES: Map<&str, bool> = Map::new("no_deposit_gauges");

pub const EPOCHS: Map<u64, EpochRecord> = Map::new("epochs");

/// Key: (epoch, gauge); only eligible gauges are stored
pub const WEIGHTS: Map<(u64, &str), GaugeVote> = Map::new("weights");

/// Key: (epoch, gauge), Value: amount funded
pub const PROCESSED: Map<(u64, &str), Uint128> = Map::new("processed");

/// Child routers, one per chain
pub const REMOTES: Remotes = Remotes::new("child_routers", "received_nonces");
