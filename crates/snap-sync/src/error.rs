//! Failure taxonomy for range application.
//!
//! No error here is fatal to the sync: every failure degrades to "re-enqueue
//! and retry" or "report and move on". Retry limits and backoff are the
//! orchestration layer's policy.

use alloy_primitives::B256;
use std::borrow::Cow;

/// Rejection produced by the range-proof engine.
///
/// Covers malformed input as well as proofs that do not authenticate the
/// claimed range (missing boundary nodes, out-of-order keys, and so on).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("range proof rejected: {reason}")]
pub struct RangeProofError {
    /// Why the engine rejected the range.
    pub reason: Cow<'static, str>,
}

impl RangeProofError {
    /// Creates an error with the given rejection reason.
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Failure of the flat key-value state store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("state store error: {message}")]
pub struct StoreError {
    /// Backend-specific failure description.
    pub message: Cow<'static, str>,
}

impl StoreError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into() }
    }
}

/// Failures surfaced while applying range responses.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapSyncError {
    /// Reconstructed account-range root does not match the sync target.
    /// Recoverable by re-requesting the same or a narrower range.
    #[error("account range root mismatch: got {got}, expected {expected}")]
    RootMismatch {
        /// Root produced by the proof engine.
        got: B256,
        /// The pivot state root the range was requested against.
        expected: B256,
    },
    /// A reconstructed storage root failed the configured root check, e.g. the
    /// canonical empty root where content was expected.
    #[error("storage reconstruction for account {account} rejected: got root {got}")]
    StorageRootRejected {
        /// Path of the account whose storage was being synced.
        account: B256,
        /// Root produced by the proof engine.
        got: B256,
    },
    /// The proof engine rejected the range outright.
    #[error(transparent)]
    Proof(#[from] RangeProofError),
    /// The flat store failed to persist verified data.
    #[error(transparent)]
    Store(#[from] StoreError),
}
