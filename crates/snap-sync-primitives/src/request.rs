use crate::PathWithAccount;
use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Maximum number of accounts packed into one from-zero storage range request.
pub const STORAGE_BATCH_SIZE: usize = 1000;

/// Upper bound of the hash-ordered key space.
pub const MAX_PATH: B256 = B256::repeat_byte(0xff);

/// Request for a proved, sorted slice of the account trie.
///
/// Describes the open interval `[starting_path, limit_path]` of the account
/// key space, to be proven against `root_hash` at `block_number`. Requests are
/// immutable value objects constructed fresh per attempt; at most one may be
/// outstanding at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRangeRequest {
    /// State root the response must verify against.
    pub root_hash: B256,
    /// Lower bound of the requested range.
    pub starting_path: B256,
    /// Upper bound of the requested range.
    pub limit_path: B256,
    /// Block the sync session is pinned to.
    pub block_number: u64,
}

impl AccountRangeRequest {
    /// Creates a request for `[starting_path, limit_path]` under `root_hash`.
    pub const fn new(
        root_hash: B256,
        starting_path: B256,
        limit_path: B256,
        block_number: u64,
    ) -> Self {
        Self { root_hash, starting_path, limit_path, block_number }
    }
}

/// Request for storage slots of one or more accounts.
///
/// Either resumes a single account's storage trie at `starting_path`
/// (a continuation) or targets a batch of accounts each enumerated from the
/// start of their trie (`starting_path` zero).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRangeRequest {
    /// State root the response must verify against.
    pub root_hash: B256,
    /// Accounts whose storage is requested, in path order.
    pub accounts: Vec<PathWithAccount>,
    /// Path to resume enumeration at; zero for a fresh batch.
    pub starting_path: B256,
    /// Block the sync session is pinned to.
    pub block_number: u64,
}

impl StorageRangeRequest {
    /// Creates a request for the storage of `accounts` under `root_hash`.
    pub const fn new(
        root_hash: B256,
        accounts: Vec<PathWithAccount>,
        starting_path: B256,
        block_number: u64,
    ) -> Self {
        Self { root_hash, accounts, starting_path, block_number }
    }

    /// Whether this request resumes a partially fetched storage trie.
    pub fn is_continuation(&self) -> bool {
        !self.starting_path.is_zero()
    }
}
