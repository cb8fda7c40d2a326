//! Error types for the canonical lockbox
//!
//! Every message starts with a short reason code (`!owner`, `!paused`, ...)
//! so that callers and relayers can match on it.

use common::InboundRejection;
use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("!owner: only the owner can perform this action")]
    Unauthorized,

    #[error("!owner: only the owner or guardian can pause")]
    UnauthorizedPauser,

    #[error("!sudo: only the sudo role can rescue assets")]
    UnauthorizedSudo,

    // ========================================================================
    // Lockbox State Errors
    // ========================================================================

    #[error("!paused: lockbox is paused")]
    Paused,

    #[error("!config: {reason}")]
    InvalidConfig { reason: String },

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("!amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("!asset: expected {expected}")]
    WrongAsset { expected: String },

    #[error("!liquidity: escrow cannot cover {requested}")]
    InsufficientLiquidity { requested: String },

    // ========================================================================
    // Cross-Chain Message Errors
    // ========================================================================

    #[error("!remote: no trusted remote configured for chain {chain_id}")]
    RemoteNotConfigured { chain_id: u64 },

    #[error("!transport: caller is not the transport endpoint")]
    NotTransport,

    #[error("!remote: untrusted source on chain {chain_id}")]
    UntrustedRemote { chain_id: u64 },

    #[error("!nonce: message {nonce} from chain {chain_id} already processed")]
    MessageReplayed { chain_id: u64, nonce: u64 },

    // ========================================================================
    // Queue Errors
    // ========================================================================

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
