mod claim;
mod config;
mod harvest;

pub use claim::execute_process_claimable;
pub use config::{
    execute_set_harvester, execute_set_reward_bridge, execute_set_reward_receiver,
    execute_set_reward_token,
};
pub use harvest::{apportion, execute_distribute_harvest, execute_harvest};
