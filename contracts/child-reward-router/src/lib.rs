//! Child Reward Router
//!
//! Satellite half of the reward router. The canonical router bridges each
//! epoch's reward tokens for this chain's gauges here and follows up with a
//! `SetDistributions` message naming the per-gauge amounts. A distributor then
//! funds the local stash reward distributor with `ProcessRewards`.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
