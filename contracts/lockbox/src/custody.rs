//! Where the escrowed asset lives.
//!
//! The flow, queue and transport handling is identical for every lockbox; what
//! differs is what happens to the asset once it is held and where it comes from
//! when it is paid out. [`Escrow`] keeps it on the contract's own balance.

use cosmwasm_std::{CosmosMsg, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Config, ESCROWED};

pub trait Custody {
    /// Called once `amount` of the bridged asset has been received for bridging.
    fn escrow(
        &self,
        storage: &mut dyn Storage,
        config: &Config,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError>;

    /// Pay `amount` out of custody to `recipient` for a credit from a satellite.
    fn release(
        &self,
        storage: &mut dyn Storage,
        config: &Config,
        recipient: &str,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError>;

    /// Emergency withdrawal of the bridged asset.
    fn rescue(
        &self,
        storage: &mut dyn Storage,
        config: &Config,
        recipient: &str,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError>;

    /// Amount currently backing satellite supply.
    fn backing(&self, storage: &dyn Storage) -> StdResult<Uint128>;
}

/// Plain custody: the asset sits on the lockbox's own balance.
pub struct Escrow;

impl Custody for Escrow {
    fn escrow(
        &self,
        storage: &mut dyn Storage,
        _config: &Config,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        let escrowed = ESCROWED.may_load(storage)?.unwrap_or_default();
        ESCROWED.save(storage, &escrowed.checked_add(amount)?)?;
        Ok(vec![])
    }

    fn release(
        &self,
        storage: &mut dyn Storage,
        config: &Config,
        recipient: &str,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        let escrowed = ESCROWED.may_load(storage)?.unwrap_or_default();
        let remaining =
            escrowed
                .checked_sub(amount)
                .map_err(|_| ContractError::InsufficientLiquidity {
                    requested: amount.to_string(),
                })?;
        ESCROWED.save(storage, &remaining)?;
        Ok(vec![config.asset.transfer_msg(recipient, amount)?])
    }

    fn rescue(
        &self,
        storage: &mut dyn Storage,
        config: &Config,
        recipient: &str,
        amount: Uint128,
    ) -> Result<Vec<CosmosMsg>, ContractError> {
        // Tokens sent to the contract outside of BridgeOut are untracked, so the
        // tracked escrow only shrinks as far as it goes.
        let escrowed = ESCROWED.may_load(storage)?.unwrap_or_default();
        ESCROWED.save(storage, &escrowed.saturating_sub(amount))?;
        Ok(vec![config.asset.transfer_msg(recipient, amount)?])
    }

    fn backing(&self, storage: &dyn Storage) -> StdResult<Uint128> {
        Ok(ESCROWED.may_load(storage)?.unwrap_or_default())
    }
}
