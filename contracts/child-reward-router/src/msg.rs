use common::{EpochStatus, InboundMessage};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub reward_token: String,
    pub stash: String,
    pub registry: String,
    pub transport: String,
    pub canonical_chain_id: u64,
    pub epoch_duration: Option<u64>,
    pub stash_periods: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Inbound `SetDistributions` from the canonical router
    ReceiveMessage(InboundMessage),

    /// Fund the stash with the recorded distributions of `gauges`
    ///
    /// Authorization: Distributor
    ProcessRewards { epoch: u64, gauges: Vec<String> },

    // Configuration (owner only)
    SetPoolIds { start: u64, end: u64 },
    SetDistributor { address: String, authorized: bool },
    SetTrustedRemote { chain_id: u64, remote: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(EpochStatusResponse)]
    EpochStatus { epoch: u64 },

    #[returns(DistributionResponse)]
    Distribution { epoch: u64, gauge: String },

    #[returns(PoolIdResponse)]
    PoolId { gauge: String },

    #[returns(IsDistributorResponse)]
    IsDistributor { address: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub reward_token: Addr,
    pub stash: Addr,
    pub registry: Addr,
    pub transport: Addr,
    pub canonical_chain_id: u64,
    pub canonical_router: Option<String>,
    pub epoch_duration: u64,
    pub stash_periods: u64,
}

#[cw_serde]
pub struct EpochStatusResponse {
    pub epoch: u64,
    pub status: EpochStatus,
    pub gauges: u32,
    pub funded: u32,
    pub total: Uint128,
}

#[cw_serde]
pub struct DistributionResponse {
    pub epoch: u64,
    pub gauge: String,
    pub amount: Uint128,
    pub funded: bool,
}

#[cw_serde]
pub struct PoolIdResponse {
    pub gauge: String,
    pub pool_id: Option<u64>,
}

#[cw_serde]
pub struct IsDistributorResponse {
    pub is_distributor: bool,
}
