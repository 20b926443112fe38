//! Seam to the external trie/Merkle-proof engine.

use crate::error::RangeProofError;
use alloy_primitives::{Bytes, B256};
use snap_sync_primitives::{AccountRangeEntry, PathWithAccount, StorageSlotEntry};

/// Outcome of verifying and merging an account range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountRangeOutcome {
    /// Root hash of the reconstructed fragment.
    pub root: B256,
    /// Whether entries exist past the last returned account.
    pub more_to_right: bool,
    /// Returned accounts carrying a non-empty storage trie.
    pub accounts_with_storage: Vec<PathWithAccount>,
    /// Code hashes of returned accounts carrying bytecode.
    pub code_hashes: Vec<B256>,
}

/// Outcome of verifying and merging a storage range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageRangeOutcome {
    /// Root hash of the reconstructed storage sub-trie.
    pub root: B256,
    /// Whether slots exist past the last returned entry.
    pub more_to_right: bool,
}

/// The Merkle range-proof engine consumed by the provider.
///
/// Implementations authenticate that a sorted run of entries is the complete
/// content of the key space between two boundary paths under the given root,
/// merge the run into locally held trie fragments, and report what lies beyond
/// it. The engine is stateless per call from the provider's point of view: it
/// is handed the full root/proof context each time. Assumed correct; the
/// provider only compares returned roots against the sync target.
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait TrieRangeVerifier: Send + Sync {
    /// Verifies and merges a run of account leaves starting at `starting_path`.
    fn verify_account_range(
        &self,
        root: B256,
        starting_path: B256,
        accounts: &[AccountRangeEntry],
        proof: &[Bytes],
    ) -> Result<AccountRangeOutcome, RangeProofError>;

    /// Verifies and merges a run of storage slots starting at `starting_path`.
    fn verify_storage_range(
        &self,
        root: B256,
        starting_path: B256,
        slots: &[StorageSlotEntry],
        proof: &[Bytes],
    ) -> Result<StorageRangeOutcome, RangeProofError>;
}
