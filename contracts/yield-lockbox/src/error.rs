use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Lockbox(#[from] lockbox::ContractError),

    #[error("!owner: only the owner can perform this action")]
    Unauthorized,

    #[error("!harvester: caller is not an authorized harvester")]
    UnauthorizedHarvester,

    #[error("!owner: callbacks can only be sent by the contract itself")]
    UnauthorizedCallback,

    #[error("!paused: lockbox is paused")]
    Paused,

    #[error("!weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("!receiver: no reward receiver configured for chain {chain_id}")]
    ReceiverNotConfigured { chain_id: u64 },

    #[error("!claimable: nothing claimable for {token} on chain {chain_id}")]
    NothingClaimable { token: String, chain_id: u64 },

    #[error("!config: {reason}")]
    InvalidConfig { reason: String },
}
