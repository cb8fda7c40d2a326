use common::Remotes;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Local CW20 representation of the emission token
    pub emission_token: Addr,
    /// Reward registry allowed to queue rewards and mint payouts
    pub reward_registry: Addr,
    pub transport: Addr,
    pub canonical_chain_id: u64,
}

/// Running totals behind the mint rate
#[cw_serde]
#[derive(Default)]
pub struct Accounting {
    /// Emission the canonical coordinator reports as sent
    pub reported_emission: Uint128,
    /// Fee debt the canonical side reports as covered by that emission
    pub covered_fees: Uint128,
    /// Emission paid to reward recipients
    pub paid_out: Uint128,
    /// Fee-denominated rewards queued by the registry
    pub fee_basis: Uint128,
    /// Part of `fee_basis` already converted and paid
    pub claimed_basis: Uint128,
    /// Fees reported to the canonical coordinator
    pub fees_notified: Uint128,
    /// Current rate, scaled by `rate::RATE_SCALE`
    pub mint_rate: Uint128,
}

impl Accounting {
    pub fn outstanding_basis(&self) -> Uint128 {
        self.fee_basis.saturating_sub(self.claimed_basis)
    }
}

pub const CONTRACT_NAME: &str = "crates.io:sidechain-satellite-coordinator";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");
pub const ACCOUNTING: Item<Accounting> = Item::new("accounting");

/// The canonical coordinator, keyed by the canonical chain id
pub const REMOTES: Remotes = Remotes::new("remotes", "received_nonces");
