//! Testing - Mock Collaborators for Multi-Test Suites
//!
//! Every chain of a scenario lives in the same `cw_multi_test::App`. Each chain
//! gets its own [`transport`] endpoint; packets sent through an endpoint sit
//! in its outbox until a test delivers them (or immediately, with
//! `auto_deliver`), which lets suites exercise delayed, reordered and
//! duplicated delivery.
//!
//! The remaining modules stand in for the external contracts the core talks
//! to: a share-based yield [`vault`], a staking [`registry`], a [`stash`]
//! reward distributor and a [`voter`] that records gauge votes.

pub mod registry;
pub mod stash;
pub mod token;
pub mod transport;
pub mod vault;
pub mod voter;
