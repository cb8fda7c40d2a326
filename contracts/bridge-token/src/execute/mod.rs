mod config;
mod incoming;
mod outgoing;

pub use config::{
    execute_pause, execute_set_guardian, execute_set_inflow_limit, execute_set_queue_delay,
    execute_set_transport, execute_set_trusted_remote, execute_unpause,
};
pub use incoming::{execute_process_queued, execute_receive_message};
pub use outgoing::execute_bridge_out;
