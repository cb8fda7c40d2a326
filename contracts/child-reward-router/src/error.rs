use common::InboundRejection;
use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("!owner: only the owner can perform this action")]
    Unauthorized,

    #[error("!distributor: caller is not an authorized distributor")]
    UnauthorizedDistributor,

    #[error("!gauge: {gauge} already has a distribution for epoch {epoch}")]
    DuplicateDistribution { epoch: u64, gauge: String },

    #[error("!gauge: no distribution for {gauge} in epoch {epoch}")]
    UnknownDistribution { epoch: u64, gauge: String },

    #[error("!processed: {gauge} already funded for epoch {epoch}")]
    AlreadyProcessed { epoch: u64, gauge: String },

    #[error("!pool: no pool id configured for {gauge}")]
    PoolNotConfigured { gauge: String },

    #[error("!config: {reason}")]
    InvalidConfig { reason: String },

    // ========================================================================
    // Transport Errors
    // ========================================================================

    #[error("!transport: caller is not the transport endpoint")]
    NotTransport,

    #[error("!remote: untrusted source for chain {chain_id}")]
    UntrustedRemote { chain_id: u64 },

    #[error("!nonce: message {nonce} from chain {chain_id} already received")]
    MessageReplayed { chain_id: u64, nonce: u64 },
}

impl From<InboundRejection> for ContractError {
    fn from(rejection: InboundRejection) -> Self {
        match rejection {
            InboundRejection::NotTransport => ContractError::NotTransport,
            InboundRejection::UntrustedRemote { chain_id } => {
                ContractError::UntrustedRemote { chain_id }
            }
            InboundRejection::Replayed { chain_id, nonce } => {
                ContractError::MessageReplayed { chain_id, nonce }
            }
            InboundRejection::Std(err) => ContractError::Std(err),
        }
    }
}
