use common::{AssetInfo, InboundMessage};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Decimal, Uint128};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub emission_token: String,
    pub emission_lockbox: String,
    pub fee_asset: AssetInfo,
    pub transport: String,
    pub emission_ratio: Decimal,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Emission
    // ========================================================================
    /// Mint emission for undistributed fee debt of `dest_chain_id` and send it
    /// to that chain's satellite coordinator
    ///
    /// `fee_amount` defaults to all undistributed debt; asking for more fails.
    ///
    /// Authorization: Distributor
    DistributeEmission {
        dest_chain_id: u64,
        fee_amount: Option<Uint128>,
        extra_payload: Option<Binary>,
    },

    /// Inbound `NotifyFees` from a satellite coordinator
    ReceiveMessage(InboundMessage),

    // ========================================================================
    // Settlement
    // ========================================================================
    /// Settle fee debt of `chain_id` with native funds
    ///
    /// Authorization: the chain's bridge delegate
    SettleFeeDebt { chain_id: u64 },

    /// CW20 settlement via `ReceiveMsg::SettleFeeDebt`
    Receive(cw20::Cw20ReceiveMsg),

    // ========================================================================
    // Configuration (owner only)
    // ========================================================================
    SetBridgeDelegate { chain_id: u64, delegate: String },
    SetDistributor { address: String, authorized: bool },
    SetEmissionRatio { ratio: Decimal },
    SetTrustedRemote { chain_id: u64, remote: String },
    SetTransport { transport: String },

    /// Move settled fees out of the working balance
    Withdraw {
        recipient: String,
        amount: Uint128,
    },
}

#[cw_serde]
pub enum ReceiveMsg {
    SettleFeeDebt { chain_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(FeeDebtResponse)]
    FeeDebt { chain_id: u64 },

    #[returns(BridgeDelegateResponse)]
    BridgeDelegate { chain_id: u64 },

    #[returns(IsDistributorResponse)]
    IsDistributor { address: String },

    #[returns(TrustedRemoteResponse)]
    TrustedRemote { chain_id: u64 },

    #[returns(TotalMintedResponse)]
    TotalMinted {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub emission_token: Addr,
    pub emission_lockbox: Addr,
    pub fee_asset: AssetInfo,
    pub transport: Addr,
    pub emission_ratio: Decimal,
}

#[cw_serde]
pub struct FeeDebtResponse {
    pub chain_id: u64,
    pub fee_debt: Uint128,
    pub distributed_fee_debt: Uint128,
    pub settled_fee_debt: Uint128,
}

#[cw_serde]
pub struct BridgeDelegateResponse {
    pub chain_id: u64,
    pub delegate: Option<Addr>,
}

#[cw_serde]
pub struct IsDistributorResponse {
    pub authorized: bool,
}

#[cw_serde]
pub struct TrustedRemoteResponse {
    pub chain_id: u64,
    pub remote: Option<String>,
}

#[cw_serde]
pub struct TotalMintedResponse {
    pub amount: Uint128,
}
