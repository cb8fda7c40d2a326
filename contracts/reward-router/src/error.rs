use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    MultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("!owner: only the owner can perform this action")]
    Unauthorized,

    #[error("!distributor: caller is not an authorized distributor")]
    UnauthorizedDistributor,

    // ========================================================================
    // Vote Errors
    // ========================================================================

    #[error("!vote: {reason}")]
    InvalidVote { reason: String },

    #[error("!epoch: epoch {epoch} has already been voted")]
    AlreadyVoted { epoch: u64 },

    // ========================================================================
    // Processing Errors
    // ========================================================================

    #[error("!epoch: epoch {epoch} is still open")]
    EpochNotClosed { epoch: u64 },

    #[error("!epoch: no vote recorded for epoch {epoch}")]
    NoVotes { epoch: u64 },

    #[error("!gauge: {gauge} has no eligible weight in epoch {epoch}")]
    UnknownGauge { epoch: u64, gauge: String },

    #[error("!processed: {gauge} already processed for epoch {epoch}")]
    AlreadyProcessed { epoch: u64, gauge: String },

    #[error("!pool: no pool id configured for {gauge}")]
    PoolNotConfigured { gauge: String },

    #[error("!remote: no child router configured for chain {chain_id}")]
    RemoteNotConfigured { chain_id: u64 },

    #[error("!config: {reason}")]
    InvalidConfig { reason: String },
}
