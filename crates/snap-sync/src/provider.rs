//! Application of proved range responses.

use crate::{
    config::SnapSyncConfig,
    error::SnapSyncError,
    metrics::SnapSyncMetrics,
    progress::{ProgressTracker, SnapRequest, StorageContinuation},
    store::StateStore,
    verifier::TrieRangeVerifier,
};
use alloy_primitives::{keccak256, Bytes, B256};
use snap_sync_primitives::{AccountRangeEntry, PathWithAccount, StorageSlotEntry};
use std::{collections::HashSet, fmt, sync::Arc};
use tracing::{debug, error, trace, warn};

/// Applies raw range responses against the sync target.
///
/// The provider receives responses from the network layer, delegates
/// verification and trie merging to the [`TrieRangeVerifier`], mutates the
/// [`ProgressTracker`] queues based on the outcome, and persists verified
/// entries into the [`StateStore`]. It never initiates network calls: worker
/// loops pull work via [`Self::next_request`] and feed responses back through
/// the `apply_*` entry points.
pub struct SnapProvider<V, S> {
    tracker: Arc<ProgressTracker>,
    verifier: V,
    store: S,
    config: SnapSyncConfig,
    metrics: SnapSyncMetrics,
}

impl<V, S> fmt::Debug for SnapProvider<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapProvider").field("config", &self.config).finish_non_exhaustive()
    }
}

impl<V, S> SnapProvider<V, S>
where
    V: TrieRangeVerifier,
    S: StateStore,
{
    /// Creates a provider for one sync session.
    pub fn new(verifier: V, store: S, config: SnapSyncConfig) -> Self {
        let tracker = Arc::new(ProgressTracker::new(config.storage_batch_size));
        Self { tracker, verifier, store, config, metrics: SnapSyncMetrics::default() }
    }

    /// Shared handle to the session's progress tracker.
    pub fn progress(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }

    /// See [`ProgressTracker::next_request`].
    pub fn next_request(&self, block_number: u64, root_hash: B256) -> Option<SnapRequest> {
        self.tracker.next_request(block_number, root_hash)
    }

    /// See [`ProgressTracker::report_account_range_done`].
    ///
    /// The network layer calls this directly when it abandons a request, e.g.
    /// on timeout, so the in-flight token is never leaked.
    pub fn report_account_range_done(&self) {
        self.tracker.report_account_range_done();
    }

    /// See [`ProgressTracker::is_complete`].
    pub fn is_complete(&self) -> bool {
        self.tracker.is_complete()
    }

    /// Applies an account range response.
    ///
    /// The range is accepted iff the engine's reconstructed root equals
    /// `expected_root`. On acceptance: storage-bearing accounts enter the
    /// storage backlog, discovered code hashes enter the code backlog, the
    /// cursor advances to the last returned path, and every returned record is
    /// persisted under its hashed address. On rejection nothing is mutated.
    ///
    /// The in-flight token is released on every exit path so a bad response
    /// cannot stall the top-level enumeration.
    pub fn apply_account_range(
        &self,
        block_number: u64,
        expected_root: B256,
        starting_path: B256,
        accounts: &[AccountRangeEntry],
        proof: &[Bytes],
    ) -> bool {
        let accepted = self.try_apply_account_range(
            block_number,
            expected_root,
            starting_path,
            accounts,
            proof,
        );
        self.tracker.report_account_range_done();
        accepted
    }

    fn try_apply_account_range(
        &self,
        block_number: u64,
        expected_root: B256,
        starting_path: B256,
        accounts: &[AccountRangeEntry],
        proof: &[Bytes],
    ) -> bool {
        let outcome = match self.verifier.verify_account_range(
            expected_root,
            starting_path,
            accounts,
            proof,
        ) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.metrics.account_range_failures.increment(1);
                warn!(
                    target: "sync::snap",
                    %err, block_number, %expected_root, %starting_path,
                    "Account range rejected by proof engine"
                );
                return false
            }
        };

        if outcome.root != expected_root {
            self.metrics.account_range_failures.increment(1);
            let err = SnapSyncError::RootMismatch { got: outcome.root, expected: expected_root };
            warn!(
                target: "sync::snap",
                %err, block_number, %starting_path,
                "Account range failed verification"
            );
            return false
        }

        for account in outcome.accounts_with_storage {
            self.tracker.enqueue_storage_backlog(account);
        }
        self.tracker.enqueue_code_hashes(outcome.code_hashes);
        self.tracker
            .advance_account_cursor(accounts.last().map(|entry| entry.path), outcome.more_to_right);

        for entry in accounts {
            // Boundary entries authenticate the range edge; they carry no data.
            let Some(account) = entry.account else { continue };
            match self.store.put_account(entry.path, account.encode_canonical()) {
                Ok(()) => self.metrics.accounts_synced.increment(1),
                Err(err) => {
                    let err = SnapSyncError::from(err);
                    error!(target: "sync::snap", %err, path = %entry.path, "Failed to persist account");
                }
            }
        }

        self.metrics.pending_storage_accounts.set(self.tracker.pending_storage_accounts() as f64);
        debug!(
            target: "sync::snap",
            block_number,
            count = accounts.len(),
            more_to_right = outcome.more_to_right,
            "Applied account range"
        );
        true
    }

    /// Applies a storage range response for a single account.
    ///
    /// Acceptance is decided by the configured
    /// [`StorageRootCheck`](crate::StorageRootCheck) against the account's
    /// declared storage root. On acceptance with more slots to the right, a
    /// continuation is queued at the last returned slot path. On rejection, a
    /// continuation retries in place while a from-zero attempt re-enters the
    /// backlog as a whole account.
    pub fn apply_storage_range(
        &self,
        block_number: u64,
        account: &PathWithAccount,
        expected_root: B256,
        starting_path: B256,
        slots: &[StorageSlotEntry],
        proof: &[Bytes],
    ) -> bool {
        let result = self.verifier.verify_storage_range(expected_root, starting_path, slots, proof);
        match result {
            Ok(outcome)
                if self
                    .config
                    .storage_root_check
                    .accepts(outcome.root, account.account.storage_root) =>
            {
                if outcome.more_to_right {
                    if let Some(last) = slots.last() {
                        self.tracker.enqueue_storage_continuation(StorageContinuation::new(
                            vec![*account],
                            last.path,
                        ));
                    } else {
                        // Contradictory response: more slots claimed but none
                        // returned to resume from. There is no path to continue
                        // at, so the account is treated as complete.
                        warn!(
                            target: "sync::snap",
                            block_number,
                            account = %account.path,
                            "Storage range claims more slots but returned none"
                        );
                    }
                }
                self.metrics.storage_ranges_merged.increment(1);
                self.metrics.pending_storage_ranges.set(self.tracker.pending_storage_ranges() as f64);
                trace!(
                    target: "sync::snap",
                    block_number,
                    account = %account.path,
                    count = slots.len(),
                    more_to_right = outcome.more_to_right,
                    "Applied storage range"
                );
                true
            }
            result => {
                self.metrics.storage_range_failures.increment(1);
                let err = match result {
                    Ok(outcome) => SnapSyncError::StorageRootRejected {
                        account: account.path,
                        got: outcome.root,
                    },
                    Err(err) => err.into(),
                };
                warn!(
                    target: "sync::snap",
                    %err, block_number, %starting_path,
                    "Storage range failed verification"
                );
                if starting_path.is_zero() {
                    // First attempt: start this account's storage over.
                    self.tracker.enqueue_storage_backlog(*account);
                } else {
                    // Continuation: retry in place at the same path.
                    self.tracker.enqueue_storage_continuation(StorageContinuation::new(
                        vec![*account],
                        starting_path,
                    ));
                }
                false
            }
        }
    }

    /// Reconciles a bytecode response against the hashes that were requested.
    ///
    /// Blobs are matched by content hash. Matching blobs are persisted and
    /// their hashes removed from the requested set; the remaining set is
    /// returned so the caller can re-request it. Duplicate or unrequested
    /// blobs are silently ignored.
    pub fn apply_codes(&self, requested_hashes: &[B256], codes: &[Bytes]) -> HashSet<B256> {
        let mut remaining: HashSet<B256> = requested_hashes.iter().copied().collect();
        for code in codes {
            let code_hash = keccak256(code);
            if remaining.remove(&code_hash) {
                match self.store.put_code(code_hash, code.clone()) {
                    Ok(()) => self.metrics.bytecodes_synced.increment(1),
                    Err(err) => {
                        let err = SnapSyncError::from(err);
                        error!(target: "sync::snap", %err, %code_hash, "Failed to persist bytecode");
                    }
                }
            }
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::StorageRootCheck,
        error::RangeProofError,
        test_utils::{InMemoryStateStore, MockVerifier},
        verifier::{AccountRangeOutcome, StorageRangeOutcome},
    };
    use alloy_trie::EMPTY_ROOT_HASH;
    use assert_matches::assert_matches;
    use snap_sync_primitives::{Account, MAX_PATH};

    const PIVOT_ROOT: B256 = B256::repeat_byte(0xab);
    const PIVOT_BLOCK: u64 = 42;

    type TestProvider = SnapProvider<Arc<MockVerifier>, Arc<InMemoryStateStore>>;

    fn setup() -> (Arc<MockVerifier>, Arc<InMemoryStateStore>, TestProvider) {
        setup_with(SnapSyncConfig::default())
    }

    fn setup_with(config: SnapSyncConfig) -> (Arc<MockVerifier>, Arc<InMemoryStateStore>, TestProvider) {
        let verifier = Arc::new(MockVerifier::default());
        let store = Arc::new(InMemoryStateStore::default());
        let provider = SnapProvider::new(Arc::clone(&verifier), Arc::clone(&store), config);
        (verifier, store, provider)
    }

    fn storage_account(path_byte: u8) -> PathWithAccount {
        let account = Account { storage_root: B256::repeat_byte(0x77), ..Account::TOTALLY_EMPTY };
        PathWithAccount::new(B256::repeat_byte(path_byte), account)
    }

    fn plain_entry(path_byte: u8) -> AccountRangeEntry {
        AccountRangeEntry::new(
            B256::repeat_byte(path_byte),
            Account { nonce: 1, ..Account::TOTALLY_EMPTY },
        )
    }

    fn accepted_outcome(more_to_right: bool) -> AccountRangeOutcome {
        AccountRangeOutcome {
            root: PIVOT_ROOT,
            more_to_right,
            accounts_with_storage: Vec::new(),
            code_hashes: Vec::new(),
        }
    }

    #[test]
    fn end_to_end_account_then_storage() {
        let (verifier, _store, provider) = setup();

        // Fresh session: the first unit of work covers the whole key space.
        let request = provider.next_request(PIVOT_BLOCK, PIVOT_ROOT);
        let request = match request {
            Some(SnapRequest::AccountRange(req)) => req,
            other => panic!("expected account range, got {other:?}"),
        };
        assert_eq!(request.starting_path, B256::ZERO);
        assert_eq!(request.limit_path, MAX_PATH);

        let with_storage = storage_account(0x20);
        let last_path = with_storage.path;
        let entries = vec![
            plain_entry(0x10),
            AccountRangeEntry::new(with_storage.path, with_storage.account),
        ];
        verifier.push_account_outcome(Ok(AccountRangeOutcome {
            root: PIVOT_ROOT,
            more_to_right: true,
            accounts_with_storage: vec![with_storage],
            code_hashes: Vec::new(),
        }));

        assert!(provider.apply_account_range(
            PIVOT_BLOCK,
            PIVOT_ROOT,
            request.starting_path,
            &entries,
            &[],
        ));

        let tracker = provider.progress();
        assert_eq!(tracker.next_account_path(), last_path);
        assert!(tracker.more_accounts_to_right());
        assert_eq!(tracker.pending_storage_accounts(), 1);

        // The in-flight slot was released and the storage batch takes
        // priority over the next account range.
        let request = provider.next_request(PIVOT_BLOCK, PIVOT_ROOT);
        assert_matches!(request, Some(SnapRequest::StorageRange(req)) => {
            assert_eq!(req.starting_path, B256::ZERO);
            assert_eq!(req.accounts, vec![with_storage]);
        });
    }

    #[test]
    fn rejected_account_range_mutates_nothing_but_releases_slot() {
        let (verifier, store, provider) = setup();
        let request = provider.next_request(PIVOT_BLOCK, PIVOT_ROOT);
        assert_matches!(request, Some(SnapRequest::AccountRange(_)));

        verifier.push_account_outcome(Ok(AccountRangeOutcome {
            root: B256::repeat_byte(0xee),
            more_to_right: true,
            accounts_with_storage: vec![storage_account(0x20)],
            code_hashes: vec![B256::repeat_byte(0x30)],
        }));

        let entries = vec![plain_entry(0x10)];
        assert!(!provider.apply_account_range(PIVOT_BLOCK, PIVOT_ROOT, B256::ZERO, &entries, &[]));

        let tracker = provider.progress();
        assert_eq!(tracker.next_account_path(), B256::ZERO);
        assert_eq!(tracker.pending_storage_accounts(), 0);
        assert_eq!(tracker.pending_code_hashes(), 0);
        assert_eq!(store.account_count(), 0);

        // The failure released the in-flight token: the caller can re-drive
        // the cursor immediately.
        assert_matches!(
            provider.next_request(PIVOT_BLOCK, PIVOT_ROOT),
            Some(SnapRequest::AccountRange(req)) => assert_eq!(req.starting_path, B256::ZERO)
        );
    }

    #[test]
    fn proof_engine_rejection_releases_slot() {
        let (verifier, _store, provider) = setup();
        assert_matches!(
            provider.next_request(PIVOT_BLOCK, PIVOT_ROOT),
            Some(SnapRequest::AccountRange(_))
        );

        verifier.push_account_outcome(Err(RangeProofError::new("proof node missing")));
        assert!(!provider.apply_account_range(
            PIVOT_BLOCK,
            PIVOT_ROOT,
            B256::ZERO,
            &[plain_entry(0x10)],
            &[],
        ));

        assert_matches!(
            provider.next_request(PIVOT_BLOCK, PIVOT_ROOT),
            Some(SnapRequest::AccountRange(_))
        );
    }

    #[test]
    fn accepted_range_persists_records_but_not_boundaries() {
        let (verifier, store, provider) = setup();

        let empty_path = B256::repeat_byte(0x11);
        let boundary_path = B256::repeat_byte(0x30);
        let entries = vec![
            plain_entry(0x10),
            AccountRangeEntry::new(empty_path, Account::TOTALLY_EMPTY),
            AccountRangeEntry::boundary(boundary_path),
        ];
        verifier.push_account_outcome(Ok(accepted_outcome(false)));

        assert!(provider.apply_account_range(PIVOT_BLOCK, PIVOT_ROOT, B256::ZERO, &entries, &[]));

        assert_eq!(store.account_count(), 2);
        // Totally-empty accounts are stored under the distinguished canonical
        // encoding.
        assert_eq!(
            store.account(empty_path).unwrap(),
            Some(Account::TOTALLY_EMPTY.encode_canonical())
        );
        assert_eq!(store.account(boundary_path).unwrap(), None);
        // The cursor tracks the boundary entry as well: it is the last proven
        // path of the range.
        assert_eq!(provider.progress().next_account_path(), boundary_path);
        assert!(provider.is_complete());
    }

    #[test]
    fn accepted_range_enqueues_discovered_code_hashes() {
        let (verifier, _store, provider) = setup();
        let code_hashes = vec![B256::repeat_byte(0x61), B256::repeat_byte(0x62)];
        verifier.push_account_outcome(Ok(AccountRangeOutcome {
            root: PIVOT_ROOT,
            more_to_right: false,
            accounts_with_storage: Vec::new(),
            code_hashes: code_hashes.clone(),
        }));

        assert!(provider.apply_account_range(
            PIVOT_BLOCK,
            PIVOT_ROOT,
            B256::ZERO,
            &[plain_entry(0x10)],
            &[],
        ));

        let tracker = provider.progress();
        assert_eq!(tracker.pending_code_hashes(), code_hashes.len());
        assert_eq!(tracker.dequeue_code_hashes(code_hashes.len()), code_hashes);
        assert_eq!(tracker.pending_code_hashes(), 0);
    }

    #[test]
    fn store_write_failure_does_not_flip_acceptance() {
        let (verifier, store, provider) = setup();
        store.set_fail_writes(true);
        verifier.push_account_outcome(Ok(accepted_outcome(false)));

        // Acceptance is decided by verification; a persistence failure is
        // surfaced via logs and recovered by re-applying the range.
        assert!(provider.apply_account_range(
            PIVOT_BLOCK,
            PIVOT_ROOT,
            B256::ZERO,
            &[plain_entry(0x10)],
            &[],
        ));
        assert_eq!(store.account_count(), 0);
        assert_eq!(provider.progress().next_account_path(), B256::repeat_byte(0x10));

        store.set_fail_writes(false);
        verifier.push_account_outcome(Ok(accepted_outcome(false)));
        assert!(provider.apply_account_range(
            PIVOT_BLOCK,
            PIVOT_ROOT,
            B256::ZERO,
            &[plain_entry(0x10)],
            &[],
        ));
        assert_eq!(store.account_count(), 1);
    }

    #[test]
    fn reapplying_identical_range_is_idempotent() {
        let (verifier, store, provider) = setup();
        let entries = vec![plain_entry(0x10), plain_entry(0x20)];

        verifier.push_account_outcome(Ok(accepted_outcome(false)));
        verifier.push_account_outcome(Ok(accepted_outcome(false)));

        assert!(provider.apply_account_range(PIVOT_BLOCK, PIVOT_ROOT, B256::ZERO, &entries, &[]));
        let snapshot = store.accounts_snapshot();

        assert!(provider.apply_account_range(PIVOT_BLOCK, PIVOT_ROOT, B256::ZERO, &entries, &[]));
        assert_eq!(store.accounts_snapshot(), snapshot);
        assert_eq!(provider.progress().next_account_path(), B256::repeat_byte(0x20));
    }

    #[test]
    fn storage_success_with_more_enqueues_continuation() {
        let (verifier, _store, provider) = setup();
        let account = storage_account(0x20);
        let slots = vec![
            StorageSlotEntry::new(B256::repeat_byte(0x01), Bytes::from_static(&[1])),
            StorageSlotEntry::new(B256::repeat_byte(0x02), Bytes::from_static(&[2])),
        ];
        verifier.push_storage_outcome(Ok(StorageRangeOutcome {
            root: B256::repeat_byte(0x99),
            more_to_right: true,
        }));

        assert!(provider.apply_storage_range(
            PIVOT_BLOCK,
            &account,
            account.account.storage_root,
            B256::ZERO,
            &slots,
            &[],
        ));

        // Continuation resumes at the last returned slot path.
        let request = provider.next_request(PIVOT_BLOCK, PIVOT_ROOT);
        assert_matches!(request, Some(SnapRequest::StorageRange(req)) => {
            assert_eq!(req.starting_path, B256::repeat_byte(0x02));
            assert_eq!(req.accounts, vec![account]);
        });
    }

    #[test]
    fn storage_success_without_more_completes_account() {
        let (verifier, _store, provider) = setup();
        let account = storage_account(0x20);
        verifier.push_storage_outcome(Ok(StorageRangeOutcome {
            root: B256::repeat_byte(0x99),
            more_to_right: false,
        }));

        assert!(provider.apply_storage_range(
            PIVOT_BLOCK,
            &account,
            account.account.storage_root,
            B256::ZERO,
            &[StorageSlotEntry::new(B256::repeat_byte(0x01), Bytes::from_static(&[1]))],
            &[],
        ));

        let tracker = provider.progress();
        assert_eq!(tracker.pending_storage_ranges(), 0);
        assert_eq!(tracker.pending_storage_accounts(), 0);
    }

    #[test]
    fn storage_success_with_more_but_no_slots_completes_account() {
        let (verifier, _store, provider) = setup();
        let account = storage_account(0x20);
        // Contradictory engine response: more slots claimed, none returned.
        verifier.push_storage_outcome(Ok(StorageRangeOutcome {
            root: B256::repeat_byte(0x99),
            more_to_right: true,
        }));

        assert!(provider.apply_storage_range(
            PIVOT_BLOCK,
            &account,
            account.account.storage_root,
            B256::ZERO,
            &[],
            &[],
        ));

        // There is no slot path to resume from; the account leaves both
        // queues instead of wedging a continuation at an unknown path.
        let tracker = provider.progress();
        assert_eq!(tracker.pending_storage_ranges(), 0);
        assert_eq!(tracker.pending_storage_accounts(), 0);
        assert!(provider.next_request(PIVOT_BLOCK, PIVOT_ROOT).is_some());
    }

    #[test]
    fn failed_continuation_retries_in_place() {
        let (verifier, _store, provider) = setup();
        let account = storage_account(0x20);
        let resume_at = B256::repeat_byte(0x40);
        verifier.push_storage_outcome(Err(RangeProofError::new("boundary proof missing")));

        assert!(!provider.apply_storage_range(
            PIVOT_BLOCK,
            &account,
            account.account.storage_root,
            resume_at,
            &[],
            &[],
        ));

        let request = provider.next_request(PIVOT_BLOCK, PIVOT_ROOT);
        assert_matches!(request, Some(SnapRequest::StorageRange(req)) => {
            assert_eq!(req.starting_path, resume_at);
            assert_eq!(req.accounts, vec![account]);
        });
    }

    #[test]
    fn failed_first_attempt_restarts_whole_account() {
        let (verifier, _store, provider) = setup();
        let account = storage_account(0x20);
        // Empty reconstruction: the weak default check treats the canonical
        // empty root as a failure.
        verifier.push_storage_outcome(Ok(StorageRangeOutcome {
            root: EMPTY_ROOT_HASH,
            more_to_right: false,
        }));

        assert!(!provider.apply_storage_range(
            PIVOT_BLOCK,
            &account,
            account.account.storage_root,
            B256::ZERO,
            &[],
            &[],
        ));

        let tracker = provider.progress();
        assert_eq!(tracker.pending_storage_ranges(), 0);
        assert_eq!(tracker.pending_storage_accounts(), 1);
        let request = provider.next_request(PIVOT_BLOCK, PIVOT_ROOT);
        assert_matches!(request, Some(SnapRequest::StorageRange(req)) => {
            assert_eq!(req.starting_path, B256::ZERO);
            assert_eq!(req.accounts, vec![account]);
        });
    }

    #[test]
    fn strict_root_check_rejects_mismatched_storage_root() {
        let (verifier, _store, provider) =
            setup_with(SnapSyncConfig::default().with_storage_root_check(StorageRootCheck::DeclaredRoot));
        let account = storage_account(0x20);

        // Non-empty but different from the declared root: the lenient default
        // would accept this, the strict policy must not.
        verifier.push_storage_outcome(Ok(StorageRangeOutcome {
            root: B256::repeat_byte(0x99),
            more_to_right: false,
        }));
        assert!(!provider.apply_storage_range(
            PIVOT_BLOCK,
            &account,
            account.account.storage_root,
            B256::ZERO,
            &[],
            &[],
        ));
        assert_eq!(provider.progress().pending_storage_accounts(), 1);

        verifier.push_storage_outcome(Ok(StorageRangeOutcome {
            root: account.account.storage_root,
            more_to_right: false,
        }));
        assert!(provider.apply_storage_range(
            PIVOT_BLOCK,
            &account,
            account.account.storage_root,
            B256::ZERO,
            &[],
            &[],
        ));
    }

    #[test]
    fn codes_are_reconciled_by_content_hash() {
        let (_verifier, store, provider) = setup();

        let blob1 = Bytes::from_static(b"contract one");
        let blob2 = Bytes::from_static(b"contract two");
        let blob3 = Bytes::from_static(b"contract three");
        let (h1, h2, h3) = (keccak256(&blob1), keccak256(&blob2), keccak256(&blob3));

        let remaining = provider.apply_codes(&[h1, h2, h3], std::slice::from_ref(&blob2));

        assert_eq!(remaining, HashSet::from([h1, h3]));
        assert_eq!(store.code(h2).unwrap(), Some(blob2));
        assert_eq!(store.code(h1).unwrap(), None);
        assert_eq!(store.code(h3).unwrap(), None);
    }

    #[test]
    fn unrequested_and_duplicate_codes_are_ignored() {
        let (_verifier, store, provider) = setup();

        let requested = Bytes::from_static(b"requested");
        let unrequested = Bytes::from_static(b"unrequested");
        let hash = keccak256(&requested);

        let remaining = provider.apply_codes(
            &[hash],
            &[unrequested.clone(), requested.clone(), requested.clone()],
        );

        assert!(remaining.is_empty());
        assert_eq!(store.code(hash).unwrap(), Some(requested));
        assert_eq!(store.code(keccak256(&unrequested)).unwrap(), None);
    }
}
