//! Messages for the yield-backed lockbox.
//!
//! The shared lockbox messages keep the exact shape of `lockbox::msg`, so
//! callers (and `lockbox::msg::bridge_out_msg`) address both contracts alike.

use common::{AssetInfo, InboundMessage};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

pub use lockbox::msg::{
    BackingResponse, ConfigResponse, EpochFlowResponse, EpochResponse, MessageReceivedResponse,
    MigrateMsg, QueuedTransferResponse, QueuedTransfersResponse, ReceiveMsg, StatsResponse,
    TrustedRemoteResponse, TrustedRemotesResponse,
};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub sudo: String,
    /// CW20 underlying of the vault
    pub asset: AssetInfo,
    pub vault: String,
    pub transport: String,
    pub inflow_limit: Uint128,
    pub queue_delay: Option<u64>,
    pub epoch_duration: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Lockbox
    // ========================================================================
    BridgeOut { dest_chain_id: u64, recipient: String },
    Receive(cw20::Cw20ReceiveMsg),
    ReceiveMessage(InboundMessage),
    ProcessQueued {
        epoch: u64,
        chain_id: u64,
        recipient: String,
        amount: Uint128,
        queued_at: u64,
    },
    Pause {},
    Unpause {},
    SetInflowLimit { limit: Uint128 },
    SetQueueDelay { delay_seconds: u64 },
    SetTrustedRemote { chain_id: u64, remote: String },
    RemoveTrustedRemote { chain_id: u64 },
    SetTransport { transport: String },
    SetGuardian { guardian: Option<String> },
    /// Authorization: Sudo only. Rescuing the bridged asset withdraws it from
    /// the vault and lowers `InternalTotalSupply`.
    Rescue {
        asset: AssetInfo,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Yield
    // ========================================================================
    /// Realize vault yield and apportion it over `chain_ids` by `weights`
    ///
    /// Authorization: Harvester
    Harvest {
        chain_ids: Vec<u64>,
        weights: Vec<u64>,
        slippage_bps: u64,
    },

    /// Send the claimable `token` of `chain_id` to that chain's reward receiver
    ///
    /// Authorization: Anyone
    ProcessClaimable { token: AssetInfo, chain_id: u64 },

    /// Authorization: Owner only
    SetRewardReceiver { chain_id: u64, receiver: String },

    /// Authorization: Owner only
    SetHarvester { address: String, authorized: bool },

    /// Track (or stop tracking) an extra reward token paid by the vault
    ///
    /// Authorization: Owner only
    SetRewardToken { token: AssetInfo, enabled: bool },

    /// Lockbox that bridges an extra reward token
    ///
    /// Authorization: Owner only
    SetRewardBridge { token: AssetInfo, lockbox: String },

    /// Internal continuation of `Harvest`
    Callback(CallbackMsg),
}

#[cw_serde]
pub enum CallbackMsg {
    DistributeHarvest { chain_ids: Vec<u64>, weights: Vec<u64> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // Lockbox
    #[returns(ConfigResponse)]
    Config {},
    #[returns(EpochResponse)]
    CurrentEpoch {},
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
    #[returns(QueuedTransfersResponse)]
    QueuedTransfers {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },
    #[returns(TrustedRemoteResponse)]
    TrustedRemote { chain_id: u64 },
    #[returns(TrustedRemotesResponse)]
    TrustedRemotes {},
    #[returns(BackingResponse)]
    Backing {},
    #[returns(StatsResponse)]
    Stats {},
    #[returns(MessageReceivedResponse)]
    MessageReceived { chain_id: u64, nonce: u64 },

    // Yield
    #[returns(YieldConfigResponse)]
    YieldConfig {},
    #[returns(SupplyResponse)]
    InternalTotalSupply {},
    #[returns(ClaimableResponse)]
    Claimable { token: AssetInfo, chain_id: u64 },
    #[returns(ClaimableResponse)]
    TotalClaimable { token: AssetInfo },
    #[returns(RewardReceiverResponse)]
    RewardReceiver { chain_id: u64 },
    #[returns(IsHarvesterResponse)]
    IsHarvester { address: String },
    #[returns(RewardTokensResponse)]
    RewardTokens {},
}

#[cw_serde]
pub struct YieldConfigResponse {
    pub vault: Addr,
}

#[cw_serde]
pub struct SupplyResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct ClaimableResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct RewardReceiverResponse {
    pub chain_id: u64,
    pub receiver: Option<String>,
}

#[cw_serde]
pub struct IsHarvesterResponse {
    pub authorized: bool,
}

#[cw_serde]
pub struct RewardTokensResponse {
    pub tokens: Vec<RewardTokenInfo>,
}

#[cw_serde]
pub struct RewardTokenInfo {
    pub token: AssetInfo,
    pub bridge: Option<Addr>,
}
