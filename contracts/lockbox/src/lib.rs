//! Canonical Lockbox - Custody of the Bridged Asset on the Canonical Chain
//!
//! The lockbox holds the real asset. Satellite chains circulate a burn/mint
//! representation whose total supply must never exceed what is escrowed here.
//!
//! # Outgoing Flow (bridge out)
//! 1. User sends the asset to the lockbox (`BridgeOut` with native funds, or a
//!    CW20 `Send` carrying `ReceiveMsg::BridgeOut`)
//! 2. The amount is added to this epoch's outflow
//! 3. Within the epoch limit a credit is sent to the satellite bridge token;
//!    above it the transfer is parked in the delay queue
//!
//! # Incoming Flow (credit from a satellite)
//! 1. The transport delivers a verified `BridgePayload::Credit`
//! 2. The amount is added to this epoch's inflow
//! 3. Within the limit the asset is released, otherwise it is queued
//!
//! # Security
//! - Per-epoch inflow/outflow ceilings, windowed (never banked)
//! - Delay queue for over-limit transfers, processable once matured
//! - Trusted remote allow-list and transport nonce replay guard
//! - Pause blocks every value-moving entry point; `Rescue` is reserved for sudo
//!
//! The handlers are generic over [`Custody`] so that specialised lockboxes
//! (see the `yield-lockbox` crate) reuse the flow and queue logic while
//! deciding where the escrowed asset actually lives.

pub mod contract;
pub mod custody;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::custody::{Custody, Escrow};
pub use crate::error::ContractError;
