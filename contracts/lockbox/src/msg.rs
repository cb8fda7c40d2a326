//! Message types for the canonical lockbox

use common::flow::QueuedTransfer;
use common::{AssetInfo, InboundMessage};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Emergency rescue role
    pub sudo: String,
    /// Asset custodied by this lockbox
    pub asset: AssetInfo,
    /// Local messaging transport endpoint
    pub transport: String,
    /// Per-epoch ceiling for each direction
    pub inflow_limit: Uint128,
    /// Queue delay in seconds (default: 7 days)
    pub queue_delay: Option<u64>,
    /// Epoch duration in seconds (default: 1 week)
    pub epoch_duration: Option<u64>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Bridge native funds to `recipient` on `dest_chain_id`
    BridgeOut { dest_chain_id: u64, recipient: String },

    /// Bridge CW20 funds (called via CW20 send with `ReceiveMsg::BridgeOut`)
    Receive(cw20::Cw20ReceiveMsg),

    /// Inbound delivery from the transport endpoint
    ReceiveMessage(InboundMessage),

    /// Execute a matured queued transfer
    ///
    /// Authorization: Anyone
    ProcessQueued {
        epoch: u64,
        chain_id: u64,
        recipient: String,
        amount: Uint128,
        queued_at: u64,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Authorization: Owner or guardian
    Pause {},

    /// Authorization: Owner only
    Unpause {},

    /// Authorization: Owner only
    SetInflowLimit { limit: Uint128 },

    /// Authorization: Owner only
    SetQueueDelay { delay_seconds: u64 },

    /// Register the bridge token contract on `chain_id`
    ///
    /// Authorization: Owner only
    SetTrustedRemote { chain_id: u64, remote: String },

    /// Authorization: Owner only
    RemoveTrustedRemote { chain_id: u64 },

    /// Authorization: Owner only
    SetTransport { transport: String },

    /// Authorization: Owner only
    SetGuardian { guardian: Option<String> },

    // ========================================================================
    // Emergency
    // ========================================================================
    /// Withdraw any asset held by the lockbox
    ///
    /// Authorization: Sudo only (works while paused)
    Rescue {
        asset: AssetInfo,
        recipient: String,
        amount: Uint128,
    },
}

/// CW20 receive hook
#[cw_serde]
pub enum ReceiveMsg {
    BridgeOut { dest_chain_id: u64, recipient: String },
}

/// Message that bridges `amount` of `asset` through `lockbox`, for contracts
/// that forward funds to a satellite chain.
pub fn bridge_out_msg(
    lockbox: &Addr,
    asset: &AssetInfo,
    dest_chain_id: u64,
    recipient: &str,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    let recipient = recipient.to_string();
    Ok(match asset {
        AssetInfo::Native { denom } => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: lockbox.to_string(),
            msg: to_json_binary(&ExecuteMsg::BridgeOut {
                dest_chain_id,
                recipient,
            })?,
            funds: vec![Coin {
                denom: denom.clone(),
                amount,
            }],
        }),
        AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Send {
                contract: lockbox.to_string(),
                amount,
                msg: to_json_binary(&ReceiveMsg::BridgeOut {
                    dest_chain_id,
                    recipient,
                })?,
            })?,
            funds: vec![],
        }),
    })
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(EpochResponse)]
    CurrentEpoch {},

    /// Flow for `epoch` (default: current epoch)
    #[returns(EpochFlowResponse)]
    EpochFlow { epoch: Option<u64> },

    #[returns(QueuedTransferResponse)]
    QueuedTransfer {
        epoch: u64,
        chain_id: u64,
        recipient: String,
        amount: Uint128,
        queued_at: u64,
    },

    /// Paginated list of live queue entries
    #[returns(QueuedTransfersResponse)]
    QueuedTransfers {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },

    #[returns(TrustedRemoteResponse)]
    TrustedRemote { chain_id: u64 },

    #[returns(TrustedRemotesResponse)]
    TrustedRemotes {},

    /// Amount backing satellite supply
    #[returns(BackingResponse)]
    Backing {},

    #[returns(StatsResponse)]
    Stats {},

    #[returns(MessageReceivedResponse)]
    MessageReceived { chain_id: u64, nonce: u64 },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub sudo: Addr,
    pub guardian: Option<Addr>,
    pub paused: bool,
    pub asset: AssetInfo,
    pub transport: Addr,
    pub epoch_duration: u64,
    pub inflow_limit: Uint128,
    pub queue_delay: u64,
}

#[cw_serde]
pub struct EpochResponse {
    pub epoch: u64,
    pub starts_at: u64,
    pub ends_at: u64,
}

#[cw_serde]
pub struct EpochFlowResponse {
    pub epoch: u64,
    pub inflow: Uint128,
    pub outflow: Uint128,
    pub limit: Uint128,
    pub inflow_remaining: Uint128,
    pub outflow_remaining: Uint128,
}

#[cw_serde]
pub struct QueuedTransferResponse {
    pub exists: bool,
    /// Queue hash of the live entry
    pub hash: Option<Binary>,
    pub transfer: Option<QueuedTransfer>,
    /// Seconds until the transfer may be processed (0 if matured or absent)
    pub remaining_seconds: u64,
}

#[cw_serde]
pub struct QueuedTransferEntry {
    pub hash: Binary,
    pub transfer: QueuedTransfer,
    pub matures_at: u64,
}

#[cw_serde]
pub struct QueuedTransfersResponse {
    pub transfers: Vec<QueuedTransferEntry>,
}

#[cw_serde]
pub struct TrustedRemoteResponse {
    pub chain_id: u64,
    pub remote: Option<String>,
}

#[cw_serde]
pub struct TrustedRemotesResponse {
    pub remotes: Vec<TrustedRemoteResponse>,
}

#[cw_serde]
pub struct BackingResponse {
    pub asset: AssetInfo,
    pub amount: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_bridged_out: u64,
    pub total_received: u64,
    pub total_queued: u64,
    pub total_processed: u64,
}

#[cw_serde]
pub struct MessageReceivedResponse {
    pub received: bool,
}
