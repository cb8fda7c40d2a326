//! State for the bridge token.
//!
//! Balances, allowances and token info live in `cw20-base` storage; only the
//! bridge configuration and ledgers are defined here.

use common::{FlowLedger, Remotes};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Optional address allowed to pause (never to unpause)
    pub guardian: Option<Addr>,
    pub paused: bool,
    /// Local messaging transport endpoint
    pub transport: Addr,
    /// Chain hosting the canonical lockbox
    pub canonical_chain_id: u64,
    pub epoch_duration: u64,
    /// Per-epoch ceiling on inbound credits
    pub inflow_limit: Uint128,
    pub queue_delay: u64,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_bridged_out: u64,
    pub total_received: u64,
    pub total_queued: u64,
    pub total_processed: u64,
}

pub const CONTRACT_NAME: &str = "crates.io:sidechain-bridge-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default queue delay in seconds (7 days)
pub const DEFAULT_QUEUE_DELAY: u64 = 604_800;

/// Longest accepted queue delay (30 days)
pub const MAX_QUEUE_DELAY: u64 = 2_592_000;

pub const CONFIG: Item<Config> = Item::new("bridge_config");
pub const STATS: Item<Stats> = Item::new("bridge_stats");

pub const FLOWS: FlowLedger = FlowLedger::new("bridge_flows", "bridge_queue");

/// Canonical lockbox per chain and consumed transport nonces
pub const REMOTES: Remotes = Remotes::new("bridge_remotes", "bridge_nonces");
