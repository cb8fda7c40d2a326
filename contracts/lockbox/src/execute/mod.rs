//! Execute handlers for the canonical lockbox
//!
//! Handlers that move the bridged asset are generic over [`Custody`](crate::Custody)
//! and are shared with the yield-bearing lockbox.

mod admin;
mod config;
mod incoming;
mod outgoing;
mod queue;

pub use admin::{execute_pause, execute_rescue, execute_unpause};
pub use config::{
    execute_remove_trusted_remote, execute_set_guardian, execute_set_inflow_limit,
    execute_set_queue_delay, execute_set_transport, execute_set_trusted_remote,
};
pub use incoming::execute_receive_message;
pub use outgoing::{bridge_out, execute_bridge_out_native, execute_receive};
pub use queue::execute_process_queued;
