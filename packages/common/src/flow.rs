//! Per-epoch flow ledger and delay queue.
//!
//! Both directions of value movement are counted per epoch. A transfer that
//! pushes its direction's counter above the configured limit is not rejected:
//! it is parked in the delay queue and may be processed once the queue delay
//! has elapsed. Capacity is windowed per epoch, unused capacity never carries
//! over.
//!
//! # Queue key (192 bytes hashed with keccak256)
//! - Bytes 0-31:    epoch (big-endian, left-padded)
//! - Bytes 32-63:   chain id (big-endian, left-padded)
//! - Bytes 64-95:   keccak256(recipient)
//! - Bytes 96-127:  amount (big-endian, left-padded)
//! - Bytes 128-159: queued_at timestamp (big-endian, left-padded)
//! - Bytes 160-191: direction tag (0 inbound, 1 outbound, left-padded)

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Order, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::{Bound, Map};
use tiny_keccak::{Hasher, Keccak};

/// Direction of a transfer relative to the contract's chain
#[cw_serde]
#[derive(Copy)]
pub enum Direction {
    /// Value arriving on this chain
    Inbound,
    /// Value leaving this chain
    Outbound,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Inbound, Direction::Outbound];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        }
    }

    fn tag(&self) -> u8 {
        match self {
            Direction::Inbound => 0,
            Direction::Outbound => 1,
        }
    }
}

/// Amounts moved during one epoch
#[cw_serde]
#[derive(Default)]
pub struct EpochFlow {
    pub inflow: Uint128,
    pub outflow: Uint128,
}

impl EpochFlow {
    pub fn get(&self, direction: Direction) -> Uint128 {
        match direction {
            Direction::Inbound => self.inflow,
            Direction::Outbound => self.outflow,
        }
    }
}

/// A transfer parked in the delay queue
#[cw_serde]
pub struct QueuedTransfer {
    pub direction: Direction,
    /// Epoch the transfer was recorded in
    pub epoch: u64,
    /// Destination chain for outbound transfers, source chain for inbound ones
    pub chain_id: u64,
    /// Recipient (remote account for outbound, local address for inbound)
    pub recipient: String,
    pub amount: Uint128,
    /// Block time (seconds) when the transfer was queued
    pub queued_at: u64,
}

impl QueuedTransfer {
    pub fn key(&self) -> [u8; 32] {
        queue_key(
            self.direction,
            self.epoch,
            self.chain_id,
            &self.recipient,
            self.amount,
            self.queued_at,
        )
    }

    /// Whether the queue delay has elapsed at `now`.
    pub fn is_matured(&self, queue_delay: u64, now: u64) -> bool {
        now >= self.queued_at.saturating_add(queue_delay)
    }

    /// Seconds left until the transfer matures (0 if already matured).
    pub fn remaining(&self, queue_delay: u64, now: u64) -> u64 {
        self.queued_at
            .saturating_add(queue_delay)
            .saturating_sub(now)
    }
}

/// Outcome of recording a transfer against the epoch limit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Within the limit, execute now
    Immediate,
    /// Over the limit, park in the delay queue
    Queued,
}

/// Content hash identifying a queued transfer.
pub fn queue_key(
    direction: Direction,
    epoch: u64,
    chain_id: u64,
    recipient: &str,
    amount: Uint128,
    queued_at: u64,
) -> [u8; 32] {
    let mut data = [0u8; 192];
    data[24..32].copy_from_slice(&epoch.to_be_bytes());
    data[32 + 24..64].copy_from_slice(&chain_id.to_be_bytes());
    data[64..96].copy_from_slice(&keccak256(recipient.as_bytes()));
    data[96 + 16..128].copy_from_slice(&amount.u128().to_be_bytes());
    data[128 + 24..160].copy_from_slice(&queued_at.to_be_bytes());
    data[191] = direction.tag();
    keccak256(&data)
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Storage for the epoch ledger and the delay queue of one contract.
pub struct FlowLedger<'a> {
    flows: Map<'a, u64, EpochFlow>,
    queue: Map<'a, &'a [u8], QueuedTransfer>,
}

impl<'a> FlowLedger<'a> {
    pub const fn new(flows_namespace: &'a str, queue_namespace: &'a str) -> Self {
        FlowLedger {
            flows: Map::new(flows_namespace),
            queue: Map::new(queue_namespace),
        }
    }

    /// Flow recorded for `epoch`; epochs never written read as zero.
    pub fn flow(&self, storage: &dyn Storage, epoch: u64) -> StdResult<EpochFlow> {
        Ok(self.flows.may_load(storage, epoch)?.unwrap_or_default())
    }

    /// Add `amount` to the epoch counter for `direction` and decide whether the
    /// transfer may run immediately.
    pub fn record(
        &self,
        storage: &mut dyn Storage,
        direction: Direction,
        epoch: u64,
        amount: Uint128,
        limit: Uint128,
    ) -> StdResult<Admission> {
        let mut flow = self.flow(storage, epoch)?;
        let total = match direction {
            Direction::Inbound => {
                flow.inflow = flow.inflow.checked_add(amount)?;
                flow.inflow
            }
            Direction::Outbound => {
                flow.outflow = flow.outflow.checked_add(amount)?;
                flow.outflow
            }
        };
        self.flows.save(storage, epoch, &flow)?;

        Ok(if total <= limit {
            Admission::Immediate
        } else {
            Admission::Queued
        })
    }

    /// Park a transfer. Returns `None` when an identical transfer is already live.
    pub fn enqueue(
        &self,
        storage: &mut dyn Storage,
        transfer: &QueuedTransfer,
    ) -> StdResult<Option<[u8; 32]>> {
        let key = transfer.key();
        if self.queue.has(storage, &key) {
            return Ok(None);
        }
        self.queue.save(storage, &key, transfer)?;
        Ok(Some(key))
    }

    pub fn queued(&self, storage: &dyn Storage, key: &[u8; 32]) -> StdResult<Option<QueuedTransfer>> {
        self.queue.may_load(storage, key)
    }

    /// Find the live entry for a transfer tuple in either direction.
    ///
    /// Inbound is checked first; an outbound twin with the same tuple is found
    /// once the inbound entry has been taken.
    pub fn locate(
        &self,
        storage: &dyn Storage,
        epoch: u64,
        chain_id: u64,
        recipient: &str,
        amount: Uint128,
        queued_at: u64,
    ) -> StdResult<Option<([u8; 32], QueuedTransfer)>> {
        for direction in Direction::ALL {
            let key = queue_key(direction, epoch, chain_id, recipient, amount, queued_at);
            if let Some(transfer) = self.queue.may_load(storage, &key)? {
                return Ok(Some((key, transfer)));
            }
        }
        Ok(None)
    }

    /// Remove and return a live queue entry.
    pub fn take(
        &self,
        storage: &mut dyn Storage,
        key: &[u8; 32],
    ) -> StdResult<Option<QueuedTransfer>> {
        let transfer = self.queue.may_load(storage, key)?;
        if transfer.is_some() {
            self.queue.remove(storage, key);
        }
        Ok(transfer)
    }

    /// Live queue entries ordered by key.
    pub fn list(
        &self,
        storage: &dyn Storage,
        start_after: Option<&[u8]>,
        limit: usize,
    ) -> StdResult<Vec<([u8; 32], QueuedTransfer)>> {
        let start = start_after.map(Bound::exclusive);
        self.queue
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| {
                let (key, transfer) = item?;
                let hash: [u8; 32] = key
                    .try_into()
                    .map_err(|_| StdError::generic_err("queue key must be 32 bytes"))?;
                Ok((hash, transfer))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    const LEDGER: FlowLedger = FlowLedger::new("flows", "queue");

    fn transfer(amount: u128, queued_at: u64) -> QueuedTransfer {
        QueuedTransfer {
            direction: Direction::Outbound,
            epoch: 7,
            chain_id: 100,
            recipient: "recipient".to_string(),
            amount: Uint128::new(amount),
            queued_at,
        }
    }

    #[test]
    fn test_record_within_and_over_limit() {
        let mut storage = MockStorage::new();
        let limit = Uint128::new(100);

        let first = LEDGER
            .record(&mut storage, Direction::Outbound, 1, Uint128::new(60), limit)
            .unwrap();
        assert_eq!(first, Admission::Immediate);

        let second = LEDGER
            .record(&mut storage, Direction::Outbound, 1, Uint128::new(40), limit)
            .unwrap();
        assert_eq!(second, Admission::Immediate, "exactly at the limit is allowed");

        let third = LEDGER
            .record(&mut storage, Direction::Outbound, 1, Uint128::new(1), limit)
            .unwrap();
        assert_eq!(third, Admission::Queued);

        let flow = LEDGER.flow(&storage, 1).unwrap();
        assert_eq!(flow.outflow, Uint128::new(101));
        assert_eq!(flow.inflow, Uint128::zero());
    }

    #[test]
    fn test_directions_are_independent() {
        let mut storage = MockStorage::new();
        let limit = Uint128::new(10);
        LEDGER
            .record(&mut storage, Direction::Outbound, 1, Uint128::new(10), limit)
            .unwrap();
        let inbound = LEDGER
            .record(&mut storage, Direction::Inbound, 1, Uint128::new(10), limit)
            .unwrap();
        assert_eq!(inbound, Admission::Immediate);
    }

    #[test]
    fn test_new_epoch_reads_zero() {
        let mut storage = MockStorage::new();
        let limit = Uint128::new(10);
        LEDGER
            .record(&mut storage, Direction::Inbound, 1, Uint128::new(11), limit)
            .unwrap();
        assert_eq!(LEDGER.flow(&storage, 2).unwrap(), EpochFlow::default());
        let next = LEDGER
            .record(&mut storage, Direction::Inbound, 2, Uint128::new(10), limit)
            .unwrap();
        assert_eq!(next, Admission::Immediate);
    }

    #[test]
    fn test_enqueue_rejects_duplicate_and_take_is_single_use() {
        let mut storage = MockStorage::new();
        let t = transfer(500, 1_000);

        let key = LEDGER.enqueue(&mut storage, &t).unwrap().unwrap();
        assert_eq!(key, t.key());
        assert!(LEDGER.enqueue(&mut storage, &t).unwrap().is_none());

        assert_eq!(LEDGER.take(&mut storage, &key).unwrap(), Some(t));
        assert_eq!(LEDGER.take(&mut storage, &key).unwrap(), None);
    }

    #[test]
    fn test_queue_key_depends_on_every_field() {
        let base = transfer(500, 1_000);
        let mut other = base.clone();
        other.queued_at += 1;
        assert_ne!(base.key(), other.key());

        let mut other = base.clone();
        other.recipient = "someone".to_string();
        assert_ne!(base.key(), other.key());

        let mut other = base.clone();
        other.direction = Direction::Inbound;
        assert_ne!(base.key(), other.key());
    }

    #[test]
    fn test_same_tuple_in_both_directions() {
        let mut storage = MockStorage::new();
        let outbound = transfer(500, 1_000);
        let inbound = QueuedTransfer {
            direction: Direction::Inbound,
            ..outbound.clone()
        };

        let out_key = LEDGER.enqueue(&mut storage, &outbound).unwrap().unwrap();
        let in_key = LEDGER.enqueue(&mut storage, &inbound).unwrap().unwrap();
        assert_ne!(out_key, in_key);

        let locate = |storage: &MockStorage| {
            LEDGER
                .locate(storage, 7, 100, "recipient", Uint128::new(500), 1_000)
                .unwrap()
        };
        assert_eq!(locate(&storage), Some((in_key, inbound)));
        LEDGER.take(&mut storage, &in_key).unwrap();
        assert_eq!(locate(&storage), Some((out_key, outbound)));
        LEDGER.take(&mut storage, &out_key).unwrap();
        assert_eq!(locate(&storage), None);
    }

    #[test]
    fn test_maturity() {
        let t = transfer(1, 1_000);
        assert!(!t.is_matured(100, 1_099));
        assert!(t.is_matured(100, 1_100));
        assert_eq!(t.remaining(100, 1_050), 50);
        assert_eq!(t.remaining(100, 2_000), 0);
    }

    #[test]
    fn test_list_paginates() {
        let mut storage = MockStorage::new();
        for i in 0..5 {
            LEDGER.enqueue(&mut storage, &transfer(100 + i, 1_000)).unwrap();
        }
        let first = LEDGER.list(&storage, None, 3).unwrap();
        assert_eq!(first.len(), 3);
        let rest = LEDGER.list(&storage, Some(&first[2].0), 10).unwrap();
        assert_eq!(rest.len(), 2);
    }
}
