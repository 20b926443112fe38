#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! State synchronization core for snap-style range download.
//!
//! Given a trusted state root pinned at a block height, the entire account and
//! storage key space is pulled from peers as proved, sorted ranges. The sync
//! proceeds in overlapping phases:
//!
//! 1. **Account enumeration**: a single sequential cursor walks the
//!    hash-ordered account space via account range requests, at most one in
//!    flight at a time.
//! 2. **Storage download**: accounts with non-empty storage roots fan out into
//!    batched storage range requests; oversized tries resume through queued
//!    continuations.
//! 3. **Bytecode download**: contract code is fetched by hash and reconciled
//!    content-addressed.
//!
//! Peer orchestration, wire framing and the Merkle range-proof engine are
//! external. Worker loops pull units of work from
//! [`ProgressTracker::next_request`], dispatch them over the network, and feed
//! responses to the matching [`SnapProvider`] `apply_*` entry point. The
//! provider delegates verification to a [`TrieRangeVerifier`], persists
//! verified entries into a [`StateStore`], and updates the tracker's queues
//! based on the outcome; it never initiates network calls itself.
//!
//! ## Feature Flags
//!
//! - `test-utils`: Export mock collaborators for testing

pub mod config;
pub mod error;
mod metrics;
pub mod progress;
pub mod provider;
pub mod store;
pub mod verifier;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{SnapSyncConfig, StorageRootCheck};
pub use error::{RangeProofError, SnapSyncError, StoreError};
pub use progress::{ProgressTracker, SnapRequest, StorageContinuation};
pub use provider::SnapProvider;
pub use store::StateStore;
pub use verifier::{AccountRangeOutcome, StorageRangeOutcome, TrieRangeVerifier};
