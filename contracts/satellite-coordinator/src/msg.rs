use common::InboundMessage;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub emission_token: String,
    pub reward_registry: String,
    pub transport: String,
    pub canonical_chain_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Queue fee-denominated rewards and report `fee_amount` of fees to the
    /// canonical coordinator
    ///
    /// Authorization: Reward registry
    QueueNewRewards {
        fee_amount: Uint128,
        reward_amount: Uint128,
    },

    /// Pay `amount` of accrued rewards to `recipient` at the current mint rate
    ///
    /// Authorization: Reward registry
    Mint { recipient: String, amount: Uint128 },

    /// Recompute the mint rate against the emission that has landed
    ///
    /// Authorization: Anyone
    SyncMintRate {},

    /// Inbound `EmissionDistributed` from the canonical coordinator
    ReceiveMessage(InboundMessage),

    // Configuration (owner only)
    SetRewardRegistry { registry: String },
    SetTrustedRemote { chain_id: u64, remote: String },
    SetTransport { transport: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(MintRateResponse)]
    MintRate {},

    #[returns(AccountingResponse)]
    Accounting {},

    /// Emission `amount` of accrued rewards would pay right now
    #[returns(PreviewMintResponse)]
    PreviewMint { amount: Uint128 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub emission_token: Addr,
    pub reward_registry: Addr,
    pub transport: Addr,
    pub canonical_chain_id: u64,
    pub canonical_coordinator: Option<String>,
}

#[cw_serde]
pub struct MintRateResponse {
    pub mint_rate: Uint128,
    pub scale: Uint128,
}

#[cw_serde]
pub struct AccountingResponse {
    pub reported_emission: Uint128,
    pub covered_fees: Uint128,
    pub paid_out: Uint128,
    pub fee_basis: Uint128,
    pub claimed_basis: Uint128,
    pub fees_notified: Uint128,
    pub mint_rate: Uint128,
    /// Emission token held by the coordinator
    pub balance: Uint128,
    /// Emission owed if every outstanding accrual were paid at `mint_rate`
    pub owed: Uint128,
}

#[cw_serde]
pub struct PreviewMintResponse {
    pub payout: Uint128,
}
