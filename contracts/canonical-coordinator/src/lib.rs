//! Canonical Emission Coordinator
//!
//! Satellite coordinators report the fees they route back to the canonical
//! chain (`NotifyFees`). Each report is fee debt owed by that chain. A
//! distributor mints emission against the part of the debt that has not been
//! distributed yet and forwards it through the emission token's lockbox to the
//! satellite coordinator, followed by an `EmissionDistributed` notice.
//!
//! Physical settlement is separate: the chain's bridge delegate delivers the
//! fee asset with `SettleFeeDebt`. Emission may be distributed before the
//! matching fees have been settled; the canonical chain extends credit against
//! future settlement.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
