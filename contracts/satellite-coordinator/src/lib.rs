//! Satellite Emission Coordinator
//!
//! Fees collected on this chain are owed to the canonical chain. The local
//! reward registry queues fee-denominated rewards here (`QueueNewRewards`) and
//! the fees are reported to the canonical coordinator as debt. Emission minted
//! against that debt arrives later as bridged tokens together with an
//! `EmissionDistributed` notice.
//!
//! Until then, rewards are paid out through a floating mint rate
//! (see [`rate`]) that converts fee-denominated accruals into emission. The
//! rate is chosen so the coordinator never promises more emission than it
//! holds; it may lag the true entitlement but never lead it.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod rate;
pub mod state;

pub use crate::error::ContractError;
