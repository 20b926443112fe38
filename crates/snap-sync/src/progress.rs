//! Progress tracking for a sync session.

use alloy_primitives::B256;
use parking_lot::Mutex;
use snap_sync_primitives::{
    AccountRangeRequest, PathWithAccount, StorageRangeRequest, MAX_PATH, STORAGE_BATCH_SIZE,
};
use std::collections::VecDeque;
use tracing::trace;

/// The next unit of sync work handed to a peer worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapRequest {
    /// A proved slice of the account trie.
    AccountRange(AccountRangeRequest),
    /// Storage slots for one or more accounts.
    StorageRange(StorageRangeRequest),
}

/// A storage range continuation waiting to be handed out again.
///
/// Queued entries deliberately carry no target root or block number: both are
/// stamped at hand-out time so retried work always follows the session's
/// current pivot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageContinuation {
    /// Accounts the continuation covers. A retry of a failed from-zero batch
    /// re-enters the backlog instead, so in practice this holds one account.
    pub accounts: Vec<PathWithAccount>,
    /// Path to resume enumeration at.
    pub starting_path: B256,
}

impl StorageContinuation {
    /// Creates a continuation resuming `accounts` at `starting_path`.
    pub const fn new(accounts: Vec<PathWithAccount>, starting_path: B256) -> Self {
        Self { accounts, starting_path }
    }
}

/// Top-level enumeration state. Guarded by a single lock so the cursor, the
/// termination flag and the in-flight token are always mutated together.
#[derive(Debug)]
struct AccountCursor {
    /// Lower bound for the next account range request. Only advances forward
    /// in hash order, and only for accepted ranges.
    next_account_path: B256,
    /// False once enumeration has reached the maximum hash.
    more_accounts_to_right: bool,
    /// Mutual-exclusion token: at most one account range request outstanding.
    account_range_in_flight: bool,
}

/// Owns every piece of pending work for one sync session.
///
/// Created once per session, pinned to one target root/block, and discarded
/// when the sync completes or the pivot is abandoned. All methods are safe
/// under arbitrary concurrent invocation: many workers drain the storage
/// queues in parallel while the in-flight token serializes the top-level
/// account enumeration.
#[derive(Debug)]
pub struct ProgressTracker {
    cursor: Mutex<AccountCursor>,
    /// Continuations of partially fetched storage tries. FIFO; entries are
    /// self-contained, so no ordering across accounts is needed.
    storage_ranges: Mutex<VecDeque<StorageContinuation>>,
    /// Accounts whose storage sync has not started yet.
    storage_backlog: Mutex<VecDeque<PathWithAccount>>,
    /// Contract code hashes pending bytecode retrieval. Not part of the
    /// completion condition.
    code_hashes: Mutex<VecDeque<B256>>,
    storage_batch_size: usize,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(STORAGE_BATCH_SIZE)
    }
}

impl ProgressTracker {
    /// Creates a tracker positioned at the start of the key space, batching up
    /// to `storage_batch_size` accounts per from-zero storage request.
    pub fn new(storage_batch_size: usize) -> Self {
        Self {
            cursor: Mutex::new(AccountCursor {
                next_account_path: B256::ZERO,
                more_accounts_to_right: true,
                account_range_in_flight: false,
            }),
            storage_ranges: Mutex::new(VecDeque::new()),
            storage_backlog: Mutex::new(VecDeque::new()),
            code_hashes: Mutex::new(VecDeque::new()),
            storage_batch_size,
        }
    }

    /// Hands out the next unit of work, stamped with the current pivot.
    ///
    /// Storage continuations come first so that in-flight multi-round contract
    /// syncs finish before new batches start, then batched from-zero storage
    /// requests, then the single top-level account range. The account
    /// enumeration is strictly sequential while storage work fans out to as
    /// many peers as are available; a stalled top-level request must never
    /// starve storage completion.
    ///
    /// Returns `None` when all remaining work is outstanding or the sync is
    /// complete; callers should back off rather than spin.
    pub fn next_request(&self, block_number: u64, root_hash: B256) -> Option<SnapRequest> {
        if let Some(continuation) = self.storage_ranges.lock().pop_front() {
            trace!(target: "sync::snap", starting_path = %continuation.starting_path, "Handing out storage continuation");
            return Some(SnapRequest::StorageRange(StorageRangeRequest::new(
                root_hash,
                continuation.accounts,
                continuation.starting_path,
                block_number,
            )))
        }

        let batch: Vec<PathWithAccount> = {
            let mut backlog = self.storage_backlog.lock();
            let take = backlog.len().min(self.storage_batch_size);
            backlog.drain(..take).collect()
        };
        if !batch.is_empty() {
            trace!(target: "sync::snap", accounts = batch.len(), "Handing out storage batch");
            return Some(SnapRequest::StorageRange(StorageRangeRequest::new(
                root_hash,
                batch,
                B256::ZERO,
                block_number,
            )))
        }

        let mut cursor = self.cursor.lock();
        if cursor.more_accounts_to_right && !cursor.account_range_in_flight {
            cursor.account_range_in_flight = true;
            trace!(target: "sync::snap", starting_path = %cursor.next_account_path, "Handing out account range");
            return Some(SnapRequest::AccountRange(AccountRangeRequest::new(
                root_hash,
                cursor.next_account_path,
                MAX_PATH,
                block_number,
            )))
        }

        None
    }

    /// Queues an account whose storage sync has not started.
    pub fn enqueue_storage_backlog(&self, account: PathWithAccount) {
        self.storage_backlog.lock().push_back(account);
    }

    /// Queues a continuation for a partially fetched storage trie.
    pub fn enqueue_storage_continuation(&self, continuation: StorageContinuation) {
        self.storage_ranges.lock().push_back(continuation);
    }

    /// Queues contract code hashes pending bytecode retrieval.
    pub fn enqueue_code_hashes(&self, hashes: impl IntoIterator<Item = B256>) {
        self.code_hashes.lock().extend(hashes);
    }

    /// Drains up to `max` code hashes for a bytecode request. Unsatisfied
    /// hashes go back through [`Self::enqueue_code_hashes`].
    pub fn dequeue_code_hashes(&self, max: usize) -> Vec<B256> {
        let mut queue = self.code_hashes.lock();
        let take = queue.len().min(max);
        queue.drain(..take).collect()
    }

    /// Releases the top-level in-flight token.
    ///
    /// Must be called exactly once per account range attempt regardless of
    /// outcome; a leaked token deadlocks the top-level enumeration.
    pub fn report_account_range_done(&self) {
        self.cursor.lock().account_range_in_flight = false;
    }

    /// Advances the cursor past an accepted account range.
    ///
    /// Callers are serialized by the in-flight token, so the cursor only ever
    /// moves forward. An accepted empty range (proof of absence) carries no
    /// last path and only updates the termination flag.
    pub(crate) fn advance_account_cursor(&self, last_path: Option<B256>, more_to_right: bool) {
        let mut cursor = self.cursor.lock();
        if let Some(path) = last_path {
            cursor.next_account_path = path;
        }
        cursor.more_accounts_to_right = more_to_right;
    }

    /// Lower bound of the next account range request.
    pub fn next_account_path(&self) -> B256 {
        self.cursor.lock().next_account_path
    }

    /// Whether the top-level enumeration still has accounts to fetch.
    pub fn more_accounts_to_right(&self) -> bool {
        self.cursor.lock().more_accounts_to_right
    }

    /// Number of queued storage continuations.
    pub fn pending_storage_ranges(&self) -> usize {
        self.storage_ranges.lock().len()
    }

    /// Number of accounts awaiting their first storage request.
    pub fn pending_storage_accounts(&self) -> usize {
        self.storage_backlog.lock().len()
    }

    /// Number of code hashes awaiting retrieval.
    pub fn pending_code_hashes(&self) -> usize {
        self.code_hashes.lock().len()
    }

    /// Whether the session has fetched the whole key space.
    ///
    /// True iff the enumeration has reached the maximum hash, no account range
    /// is in flight, and both storage queues are empty. The locks are taken
    /// together so the four sub-conditions are observed as one snapshot.
    pub fn is_complete(&self) -> bool {
        let cursor = self.cursor.lock();
        let ranges = self.storage_ranges.lock();
        let backlog = self.storage_backlog.lock();
        !cursor.more_accounts_to_right &&
            !cursor.account_range_in_flight &&
            ranges.is_empty() &&
            backlog.is_empty()
    }
}
