//! Common - Shared Types and Utilities for the Sidechain Bridge Contracts
//!
//! This package provides the pieces every contract in the workspace agrees on:
//! asset identity, epoch arithmetic, the per-epoch flow ledger with its delay
//! queue, the messaging transport envelope, cross-chain payloads and the
//! interfaces of the external collaborators (yield vault, staking registry,
//! stash reward distributor, gauge voter).

pub mod asset;
pub mod epoch;
pub mod flow;
pub mod interfaces;
pub mod message;
pub mod transport;

pub use asset::{AssetInfo, AssetKind};
pub use epoch::{epoch_of, EpochStatus, DEFAULT_EPOCH_DURATION};
pub use flow::{Admission, Direction, EpochFlow, FlowLedger, QueuedTransfer};
pub use transport::{InboundMessage, InboundRejection, Remotes, TransportExecuteMsg};
