//! State definitions for the canonical lockbox

use common::{AssetInfo, FlowLedger, Remotes};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address for configuration
    pub owner: Addr,
    /// Emergency role allowed to rescue assets (stricter than owner)
    pub sudo: Addr,
    /// Optional address allowed to pause (never to unpause)
    pub guardian: Option<Addr>,
    /// Whether bridging is currently paused
    pub paused: bool,
    /// The asset custodied by this lockbox
    pub asset: AssetInfo,
    /// Local messaging transport endpoint
    pub transport: Addr,
    /// Epoch length in seconds
    pub epoch_duration: u64,
    /// Per-epoch ceiling applied to inflow and outflow independently
    pub inflow_limit: Uint128,
    /// Minimum wait in seconds before a queued transfer may be processed
    pub queue_delay: u64,
}

/// Lockbox statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_bridged_out: u64,
    pub total_received: u64,
    pub total_queued: u64,
    pub total_processed: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:sidechain-lockbox";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default queue delay in seconds (7 days)
pub const DEFAULT_QUEUE_DELAY: u64 = 604_800;

/// Longest accepted queue delay (30 days)
pub const MAX_QUEUE_DELAY: u64 = 2_592_000;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const STATS: Item<Stats> = Item::new("stats");

/// Bridged asset held on behalf of satellite holders (plain custody only)
pub const ESCROWED: Item<Uint128> = Item::new("escrowed");

/// Epoch inflow/outflow ledger and delay queue
pub const FLOWS: FlowLedger = FlowLedger::new("epoch_flows", "queued_transfers");

/// Satellite bridge token per chain and consumed transport nonces
pub const REMOTES: Remotes = Remotes::new("trusted_remotes", "received_nonces");
