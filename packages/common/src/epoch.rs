//! Epoch arithmetic.
//!
//! Every ledger in the workspace is keyed by `floor(timestamp / epoch_duration)`.
//! Each contract instance carries its own duration; the default is one week.

use cosmwasm_schema::cw_serde;

/// Lifecycle of a reward epoch
#[cw_serde]
pub enum EpochStatus {
    /// Current epoch, votes accepted
    Open,
    /// Past epoch, weights frozen, nothing funded yet
    Closed,
    /// Funding computed and forwarded, some gauges still pending
    Queued,
    /// Every gauge of the epoch funded
    Distributed,
}

/// Default epoch duration in seconds (one week)
pub const DEFAULT_EPOCH_DURATION: u64 = 604_800;

/// Epoch containing `timestamp` (seconds). A zero duration maps everything to epoch 0.
pub fn epoch_of(timestamp: u64, epoch_duration: u64) -> u64 {
    timestamp.checked_div(epoch_duration).unwrap_or(0)
}

/// First second of `epoch`.
pub fn epoch_start(epoch: u64, epoch_duration: u64) -> u64 {
    epoch.saturating_mul(epoch_duration)
}

/// First second of the epoch after `epoch`.
pub fn epoch_end(epoch: u64, epoch_duration: u64) -> u64 {
    epoch_start(epoch.saturating_add(1), epoch_duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_boundaries() {
        let week = DEFAULT_EPOCH_DURATION;
        assert_eq!(epoch_of(0, week), 0);
        assert_eq!(epoch_of(week - 1, week), 0);
        assert_eq!(epoch_of(week, week), 1);
        assert_eq!(epoch_of(10 * week + 5, week), 10);
    }

    #[test]
    fn test_epoch_start_end() {
        assert_eq!(epoch_start(3, 100), 300);
        assert_eq!(epoch_end(3, 100), 400);
        assert_eq!(epoch_of(epoch_end(3, 100), 100), 4);
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(epoch_of(12345, 0), 0);
    }
}
