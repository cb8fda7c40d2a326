//! Asset identity shared by all contracts.
//!
//! An asset is either a native bank denom or a CW20 contract. Contracts that
//! custody a single bridged asset store its `AssetInfo` once at instantiation
//! and classify any other asset against it with [`AssetInfo::classify`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use std::fmt;

#[cw_serde]
pub enum AssetInfo {
    /// Native bank denom (e.g. "uluna")
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: Addr },
}

/// Result of classifying an asset against a contract's bridged asset.
#[derive(Clone, Debug, PartialEq)]
pub enum AssetKind {
    /// The asset the contract custodies for the bridge
    Bridged,
    /// Any other asset
    Foreign(AssetInfo),
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::Native {
            denom: denom.into(),
        }
    }

    pub fn cw20(contract_addr: Addr) -> Self {
        AssetInfo::Cw20 { contract_addr }
    }

    /// Classify `self` relative to the contract's bridged asset.
    pub fn classify(&self, bridged: &AssetInfo) -> AssetKind {
        if self == bridged {
            AssetKind::Bridged
        } else {
            AssetKind::Foreign(self.clone())
        }
    }

    /// Storage/attribute friendly identifier (denom or contract address).
    pub fn key(&self) -> String {
        match self {
            AssetInfo::Native { denom } => denom.clone(),
            AssetInfo::Cw20 { contract_addr } => contract_addr.to_string(),
        }
    }

    /// Build a message moving `amount` of this asset from the contract to `recipient`.
    pub fn transfer_msg(&self, recipient: &str, amount: Uint128) -> StdResult<CosmosMsg> {
        Ok(match self {
            AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }),
            AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }),
        })
    }

    /// Query the balance `holder` has of this asset.
    pub fn query_balance(&self, querier: &QuerierWrapper, holder: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => Ok(querier.query_balance(holder, denom)?.amount),
            AssetInfo::Cw20 { contract_addr } => {
                let res: BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &Cw20QueryMsg::Balance {
                        address: holder.to_string(),
                    },
                )?;
                Ok(res.balance)
            }
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "native:{}", denom),
            AssetInfo::Cw20 { contract_addr } => write!(f, "cw20:{}", contract_addr),
        }
    }
}

/// Amount of `denom` attached to a call, if it is the only coin sent.
pub fn sole_coin_amount(funds: &[Coin], denom: &str) -> Option<Uint128> {
    match funds {
        [coin] if coin.denom == denom => Some(coin.amount),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coins;

    #[test]
    fn test_classify() {
        let bridged = AssetInfo::cw20(Addr::unchecked("wrapped"));
        assert_eq!(
            AssetInfo::cw20(Addr::unchecked("wrapped")).classify(&bridged),
            AssetKind::Bridged
        );
        assert_eq!(
            AssetInfo::native("uluna").classify(&bridged),
            AssetKind::Foreign(AssetInfo::native("uluna"))
        );
    }

    #[test]
    fn test_sole_coin_amount() {
        assert_eq!(
            sole_coin_amount(&coins(5, "uluna"), "uluna"),
            Some(Uint128::new(5))
        );
        assert_eq!(sole_coin_amount(&coins(5, "uusd"), "uluna"), None);
        assert_eq!(sole_coin_amount(&[], "uluna"), None);

        let two = vec![Coin::new(1, "uluna"), Coin::new(1, "uusd")];
        assert_eq!(sole_coin_amount(&two, "uluna"), None);
    }

    #[test]
    fn test_transfer_msg_cw20() {
        let info = AssetInfo::cw20(Addr::unchecked("token"));
        let msg = info.transfer_msg("bob", Uint128::new(7)).unwrap();
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute { contract_addr, .. }) => {
                assert_eq!(contract_addr, "token")
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
