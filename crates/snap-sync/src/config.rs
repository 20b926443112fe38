//! Configuration for snap sync.

use alloy_primitives::B256;
use alloy_trie::EMPTY_ROOT_HASH;
use snap_sync_primitives::STORAGE_BATCH_SIZE;

/// How a reconstructed storage root is judged.
///
/// [`Self::NonEmptyRoot`] mirrors the historical behavior: any reconstruction
/// that differs from the canonical empty-trie root is accepted, even when the
/// account declares a different storage root. It remains the default so the
/// surrounding control flow is unchanged; [`Self::DeclaredRoot`] upgrades the
/// check without touching it. See DESIGN.md for the open-question record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageRootCheck {
    /// Accept any reconstruction that is not the canonical empty root.
    #[default]
    NonEmptyRoot,
    /// Require the reconstruction to equal the account's declared storage root.
    DeclaredRoot,
}

impl StorageRootCheck {
    /// Whether `computed` passes the check against the account's `declared`
    /// storage root.
    pub fn accepts(&self, computed: B256, declared: B256) -> bool {
        match self {
            Self::NonEmptyRoot => computed != EMPTY_ROOT_HASH,
            Self::DeclaredRoot => computed == declared,
        }
    }
}

/// Configuration for snap sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapSyncConfig {
    /// Maximum number of accounts packed into one from-zero storage range
    /// request.
    pub storage_batch_size: usize,
    /// Acceptance policy for reconstructed storage roots.
    pub storage_root_check: StorageRootCheck,
}

impl Default for SnapSyncConfig {
    fn default() -> Self {
        Self {
            storage_batch_size: STORAGE_BATCH_SIZE,
            storage_root_check: StorageRootCheck::default(),
        }
    }
}

impl SnapSyncConfig {
    /// Sets the storage batch size.
    pub const fn with_storage_batch_size(mut self, storage_batch_size: usize) -> Self {
        self.storage_batch_size = storage_batch_size;
        self
    }

    /// Sets the storage root acceptance policy.
    pub const fn with_storage_root_check(mut self, storage_root_check: StorageRootCheck) -> Self {
        self.storage_root_check = storage_root_check;
        self
    }
}
