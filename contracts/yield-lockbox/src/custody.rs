use common::interfaces::{VaultExecuteMsg, VaultHookMsg};
use common::AssetInfo;
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, StdResult, Storage, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use lockbox::state::Config;
use lockbox::{ContractError, Custody};

use crate::state::{INTERNAL_TOTAL_SUPPLY, YIELD_CONFIG};

/// Custody in a yield vault, accounted by `InternalTotalSupply`.
pub struct YieldCustody {
    pub vault: Addr,
}

impl YieldCustody {
    pub fn load(storage: &dyn Storage) -> StdResult<Self> {
        Ok(YieldCustody {
            vault: YIELD_CONFIG.load(storage)?.vault,
        })
    }

    fn withdraw_msg(&self, recipient: &str, amount: Uint128) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.vault.to_string(),
            msg: to_json_binary(&VaultExecuteMsg::WithdrawUnderlying {
                amount,
                recipient: recipient.to_string(),
            })?,
            funds: vec![],
        }))
    }

    fn decrease_supply(&self, storage: &mut dyn Storage, amount: Uint128) -> Result<(), ContractError> {
        let supply = INTERNAL_TOTAL_SUPPLY.load(storage)?;
        let remaining = supply
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientLiquidity {
                requested: amount.to_string(),
            })?;
        INTERNAL_TOTAL_SUPPLY.save(storage, &remaining)?;
        Ok(())
    }
}

impl Custody for YieldCustody {
    fn escrow(
        &self,
        storage: &mut dyn Storage,
        config: &Config,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        let token = match &config.asset {
            AssetInfo::Cw20 { contract_addr } => contract_addr,
            AssetInfo::Native { .. } => {
                return Err(ContractError::WrongAsset {
                    expected: "a CW20 vault underlying".to_string(),
                })
            }
        };

        let supply = INTERNAL_TOTAL_SUPPLY.load(storage)?;
        INTERNAL_TOTAL_SUPPLY.save(storage, &supply.checked_add(amount)?)?;

        Ok(vec![CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Send {
                contract: self.vault.to_string(),
                amount,
                msg: to_json_binary(&VaultHookMsg::Deposit {})?,
            })?,
            funds: vec![],
        })])
    }

    fn release(
        &self,
        storage: &mut dyn Storage,
        _config: &Config,
        recipient: &str,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        self.decrease_supply(storage, amount)?;
        Ok(vec![self.withdraw_msg(recipient, amount)?])
    }

    fn rescue(
        &self,
        storage: &mut dyn Storage,
        _config: &Config,
        recipient: &str,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        self.decrease_supply(storage, amount)?;
        Ok(vec![self.withdraw_msg(recipient, amount)?])
    }

    fn backing(&self, storage: &dyn Storage) -> StdResult<Uint128> {
        INTERNAL_TOTAL_SUPPLY.load(storage)
    }
}
