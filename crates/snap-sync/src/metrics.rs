//! Snap sync metrics.

use metrics::{Counter, Gauge};
use metrics_derive::Metrics;

#[derive(Metrics)]
#[metrics(scope = "snap_sync")]
pub(crate) struct SnapSyncMetrics {
    /// Number of account records persisted.
    pub(crate) accounts_synced: Counter,
    /// Number of storage ranges merged.
    pub(crate) storage_ranges_merged: Counter,
    /// Number of bytecodes persisted.
    pub(crate) bytecodes_synced: Counter,
    /// Account range responses that failed verification.
    pub(crate) account_range_failures: Counter,
    /// Storage range responses that failed verification.
    pub(crate) storage_range_failures: Counter,
    /// Queued storage continuations.
    pub(crate) pending_storage_ranges: Gauge,
    /// Accounts awaiting their first storage request.
    pub(crate) pending_storage_accounts: Gauge,
}
