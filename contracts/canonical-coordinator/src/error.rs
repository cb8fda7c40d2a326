use common::InboundRejection;
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

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("!owner: only the owner can perform this action")]
    Unauthorized,

    #[error("!distributor: caller is not an authorized distributor")]
    UnauthorizedDistributor,

    #[error("!delegate: sender is not the bridge delegate of chain {chain_id}")]
    UnauthorizedDelegate { chain_id: u64 },

    // ========================================================================
    // Accounting Errors
    // ========================================================================

    #[error("!debt: requested {requested} but only {available} fee debt is undistributed on chain {chain_id}")]
    InsufficientFeeDebt {
        chain_id: u64,
        requested: String,
        available: String,
    },

    #[error("!amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("!asset: expected {expected}")]
    WrongAsset { expected: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("!delegate: no bridge delegate configured for chain {chain_id}")]
    BridgeDelegateNotConfigured { chain_id: u64 },

    #[error("!remote: no satellite coordinator configured for chain {chain_id}")]
    RemoteNotConfigured { chain_id: u64 },

    #[error("!config: {reason}")]
    InvalidConfig { reason: String },

    // ========================================================================
    // Transport Errors
    // ========================================================================

    #[error("!transport: caller is not the transport endpoint")]
    NotTransport,

    #[error("!remote: untrusted source on chain {chain_id}")]
    UntrustedRemote { chain_id: u64 },

    #[error("!nonce: message {nonce} from chain {chain_id} already processed")]
    MessageReplayed { chain_id: u64, nonce: u64 },

    #[error("!payload: {reason}")]
    UnexpectedPayload { reason: String },
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
