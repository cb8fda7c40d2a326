use common::EpochStatus;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub reward_token: String,
    pub reward_lockbox: String,
    pub stash: String,
    pub registry: String,
    pub voter: Option<String>,
    pub transport: String,
    pub chain_id: u64,
    /// Defaults to one week
    pub epoch_duration: Option<u64>,
    /// Defaults to [`crate::state::DEFAULT_STASH_PERIODS`]
    pub stash_periods: Option<u64>,
    pub reward_per_epoch: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Record the gauge weight vote of the current epoch and forward it to the
    /// gauge voter, if one is configured
    ///
    /// Authorization: Distributor
    VoteGaugeWeight {
        gauges: Vec<String>,
        weights: Vec<u64>,
    },

    /// Fund `gauges` with their share of a closed epoch's budget
    ///
    /// Authorization: Distributor
    ProcessRewards { epoch: u64, gauges: Vec<String> },

    /// Map gauges of registry pools `start..end` to their pool id on this chain
    ///
    /// Authorization: Owner
    SetPoolIds { start: u64, end: u64 },

    /// Map `gauges` to the chain whose stash funds them
    ///
    /// Authorization: Owner
    SetDstChainIds { gauges: Vec<String>, chain_id: u64 },

    // Configuration (owner only)
    SetNoDepositGauge { gauge: String, no_deposit: bool },
    SetRewardPerEpoch { amount: Uint128 },
    SetDistributor { address: String, authorized: bool },
    SetVoter { voter: Option<String> },
    SetTrustedRemote { chain_id: u64, remote: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(EpochStatusResponse)]
    EpochStatus { epoch: u64 },

    #[returns(EpochInfoResponse)]
    EpochInfo { epoch: u64 },

    #[returns(GaugeInfoResponse)]
    GaugeInfo { gauge: String },

    /// Eligible weight of `gauge` in `epoch` and what it was funded with
    #[returns(WeightResponse)]
    Weight { epoch: u64, gauge: String },

    #[returns(IsDistributorResponse)]
    IsDistributor { address: String },

    #[returns(TrustedRemoteResponse)]
    TrustedRemote { chain_id: u64 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub reward_token: Addr,
    pub reward_lockbox: Addr,
    pub stash: Addr,
    pub registry: Addr,
    pub voter: Option<Addr>,
    pub transport: Addr,
    pub chain_id: u64,
    pub epoch_duration: u64,
    pub stash_periods: u64,
    pub reward_per_epoch: Uint128,
    pub current_epoch: u64,
}

#[cw_serde]
pub struct EpochStatusResponse {
    pub epoch: u64,
    pub status: EpochStatus,
}

#[cw_serde]
pub struct EpochInfoResponse {
    pub epoch: u64,
    pub voted: bool,
    pub reward: Uint128,
    pub total_weight: Uint128,
    pub eligible: u32,
    pub processed: u32,
}

#[cw_serde]
pub struct GaugeInfoResponse {
    pub gauge: String,
    pub pool_id: Option<u64>,
    pub dst_chain_id: Option<u64>,
    pub no_deposit: bool,
}

#[cw_serde]
pub struct WeightResponse {
    pub epoch: u64,
    pub gauge: String,
    /// Zero when the gauge was excluded or not voted
    pub weight: u64,
    pub dst_chain_id: Option<u64>,
    pub funded: Option<Uint128>,
}

#[cw_serde]
pub struct IsDistributorResponse {
    pub is_distributor: bool,
}

#[cw_serde]
pub struct TrustedRemoteResponse {
    pub chain_id: u64,
    pub remote: Option<String>,
}
