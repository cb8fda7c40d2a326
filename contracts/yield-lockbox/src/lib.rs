//! Yield-Backed Lockbox
//!
//! A canonical lockbox whose escrow lives in a yield vault. Bridging, limits,
//! the delay queue and the transport checks are the `lockbox` crate's; this
//! crate supplies [`YieldCustody`] and adds the yield flow:
//!
//! 1. An authorized harvester calls `Harvest`: the vault realizes yield and a
//!    callback apportions everything above what the satellites are owed
//!    (`InternalTotalSupply`) and above what is already claimable, by weight,
//!    into per-chain claimable buckets.
//! 2. Anyone calls `ProcessClaimable` to send one chain's bucket to that
//!    chain's reward receiver. Yield in the bridged asset is minted on the
//!    satellite (and joins `InternalTotalSupply`); extra reward tokens travel
//!    through their own lockbox.
//!
//! Vault share rounding may leave the underlying balance up to one unit below
//! `InternalTotalSupply`.

pub mod contract;
pub mod custody;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::custody::YieldCustody;
pub use crate::error::ContractError;
