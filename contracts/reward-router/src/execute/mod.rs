//! Execute handlers for the reward router

mod config;
mod process;
mod vote;

pub use config::{
    execute_set_distributor, execute_set_dst_chain_ids, execute_set_no_deposit_gauge,
    execute_set_pool_ids, execute_set_reward_per_epoch, execute_set_trusted_remote,
    execute_set_voter,
};
pub use process::execute_process_rewards;
pub use vote::execute_vote_gauge_weight;

use cosmwasm_std::{MessageInfo, Storage};

use crate::error::ContractError;
use crate::state::DISTRIBUTORS;

pub(crate) fn assert_distributor(
    storage: &dyn Storage,
    info: &MessageInfo,
) -> Result<(), ContractError> {
    if !DISTRIBUTORS
        .may_load(storage, &info.sender)?
        .unwrap_or(false)
    {
        return Err(ContractError::UnauthorizedDistributor);
    }
    Ok(())
}
