use common::InboundRejection;
use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Base(#[from] cw20_base::ContractError),

    #[error("!owner: only the owner can perform this action")]
    Unauthorized,

    #[error("!owner: only the owner or guardian can pause")]
    UnauthorizedPauser,

    #[error("!paused: bridge token is paused")]
    Paused,

    #[error("!config: {reason}")]
    InvalidConfig { reason: String },

    #[error("!amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("!remote: no trusted remote configured for chain {chain_id}")]
    RemoteNotConfigured { chain_id: u64 },

    #[error("!transport: caller is not the transport endpoint")]
    NotTransport,

    #[error("!remote: untrusted source on chain {chain_id}")]
    UntrustedRemote { chain_id: u64 },

    #[error("!nonce: message {nonce} from chain {chain_id} already processed")]
    MessageReplayed { chain_id: u64, nonce: u64 },

    #[error("!root: no live queued transfer matches")]
    UnknownQueuedTransfer,

    #[error("!timestamp: queue delay not elapsed, {remaining_seconds} seconds remaining")]
    QueueDelayNotElapsed { remaining_seconds: u64 },

    #[error("!queued: an identical transfer is already queued")]
    TransferAlreadyQueued,
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
