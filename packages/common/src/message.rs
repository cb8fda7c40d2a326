//! Cross-chain payloads.
//!
//! Each sender/receiver pair speaks its own payload enum, JSON encoded inside
//! the transport envelope. A receiver decoding a payload of the wrong family
//! fails the delivery.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

/// Lockbox <-> BridgeToken
#[cw_serde]
pub enum BridgePayload {
    /// Credit `amount` of the bridged asset to `recipient` on the receiving chain
    /// (mint on a satellite, release on the canonical chain).
    Credit { recipient: String, amount: Uint128 },
}

/// CanonicalCoordinator <-> SatelliteCoordinator
#[cw_serde]
pub enum CoordinatorPayload {
    /// Satellite -> canonical: fees routed to the bridge delegate sender
    NotifyFees { amount: Uint128 },
    /// Canonical -> satellite: emission minted for `fee_amount` of fee debt
    EmissionDistributed {
        emission_amount: Uint128,
        fee_amount: Uint128,
        extra_payload: Option<Binary>,
    },
}

/// RewardRouter -> ChildRewardRouter
#[cw_serde]
pub enum RouterPayload {
    SetDistributions {
        epoch: u64,
        distributions: Vec<GaugeDistribution>,
    },
}

#[cw_serde]
pub struct GaugeDistribution {
    pub gauge: String,
    pub amount: Uint128,
}
