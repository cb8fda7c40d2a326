//! Bridge Token - Satellite Representation of the Canonical Asset
//!
//! A CW20 token (built on `cw20-base`) whose supply only changes through the
//! bridge: inbound credits from the canonical lockbox mint, `BridgeOut` burns
//! and sends a credit back. Holders get the regular CW20 surface.
//!
//! The minter is the contract itself, so nothing outside the bridge flow can
//! mint. Inbound credits go through the same per-epoch limit and delay queue
//! as the lockbox. The pause flag is independent of the lockbox's.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
