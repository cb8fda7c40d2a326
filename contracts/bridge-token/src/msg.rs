use common::flow::QueuedTransfer;
use common::InboundMessage;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{
    AllAccountsResponse, AllowanceResponse, BalanceResponse, Expiration, MinterResponse,
    TokenInfoResponse,
};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub owner: String,
    /// Local messaging transport endpoint
    pub transport: String,
    /// Chain hosting the canonical lockbox
    pub canonical_chain_id: u64,
    /// Per-epoch ceiling on inbound credits
    pub inflow_limit: Uint128,
    /// Queue delay in seconds (default: 7 days)
    pub queue_delay: Option<u64>,
    /// Epoch duration in seconds (default: 1 week)
    pub epoch_duration: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // CW20
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    Burn {
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Bridge
    // ========================================================================
    /// Burn `amount` from the caller and credit `recipient` on the canonical chain
    BridgeOut { recipient: String, amount: Uint128 },

    /// Inbound delivery from the transport endpoint
    ReceiveMessage(InboundMessage),

    /// Mint a matured queued credit. Anyone may call this.
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
    Unpause {},
    SetInflowLimit { limit: Uint128 },
    SetQueueDelay { delay_seconds: u64 },
    /// Register the canonical lockbox on `chain_id`
    SetTrustedRemote { chain_id: u64, remote: String },
    SetTransport { transport: String },
    SetGuardian { guardian: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // CW20
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(MinterResponse)]
    Minter {},
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(AllAccountsResponse)]
    AllAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    // Bridge
    #[returns(ConfigResponse)]
    Config {},
    #[returns(EpochFlowResponse)]
    EpochFlow { epoch: Option<u64> },
    #[returns(QueuedTransfersResponse)]
    QueuedTransfers {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },
    #[returns(TrustedRemoteResponse)]
    TrustedRemote { chain_id: u64 },
    #[returns(StatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub guardian: Option<Addr>,
    pub paused: bool,
    pub transport: Addr,
    pub canonical_chain_id: u64,
    pub epoch_duration: u64,
    pub inflow_limit: Uint128,
    pub queue_delay: u64,
}

#[cw_serde]
pub struct EpochFlowResponse {
    pub epoch: u64,
    pub inflow: Uint128,
    pub outflow: Uint128,
    pub limit: Uint128,
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
pub struct StatsResponse {
    pub total_bridged_out: u64,
    pub total_received: u64,
    pub total_queued: u64,
    pub total_processed: u64,
}
