//! Gauge Vote Reward Router
//!
//! Each epoch a distributor casts the gauge weight vote. Weights of gauges
//! that are flagged no-deposit or lack a pool / destination chain mapping are
//! recorded as excluded and never funded. Once the epoch has closed,
//! `ProcessRewards` splits the epoch's reward budget pro rata over the
//! eligible weights:
//!
//! - gauges on this chain are funded directly on the stash reward distributor
//! - gauges on other chains are grouped per chain; the chain total is bridged
//!   through the reward token's lockbox to the child router, followed by a
//!   `SetDistributions` message listing the per-gauge amounts
//!
//! Epochs move Open -> Closed -> Queued -> Distributed; the transitions are
//! driven by the clock and by explicit calls, never by reads.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
