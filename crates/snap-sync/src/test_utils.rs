//! Mock collaborators for exercising the sync core without a real trie engine
//! or database.

use crate::{
    error::{RangeProofError, StoreError},
    store::StateStore,
    verifier::{AccountRangeOutcome, StorageRangeOutcome, TrieRangeVerifier},
};
use alloy_primitives::{Bytes, B256};
use parking_lot::Mutex;
use snap_sync_primitives::{AccountRangeEntry, StorageSlotEntry};
use std::{
    collections::{HashMap, VecDeque},
    sync::atomic::{AtomicBool, Ordering},
};

/// A trie engine double that replays scripted outcomes in order.
///
/// Each `verify_*` call pops the next scripted outcome; an unscripted call is
/// reported as a proof rejection so a test failure points at the missing
/// script entry instead of panicking inside the provider.
#[derive(Debug, Default)]
pub struct MockVerifier {
    account_outcomes: Mutex<VecDeque<Result<AccountRangeOutcome, RangeProofError>>>,
    storage_outcomes: Mutex<VecDeque<Result<StorageRangeOutcome, RangeProofError>>>,
}

impl MockVerifier {
    /// Scripts the outcome of the next account range verification.
    pub fn push_account_outcome(&self, outcome: Result<AccountRangeOutcome, RangeProofError>) {
        self.account_outcomes.lock().push_back(outcome);
    }

    /// Scripts the outcome of the next storage range verification.
    pub fn push_storage_outcome(&self, outcome: Result<StorageRangeOutcome, RangeProofError>) {
        self.storage_outcomes.lock().push_back(outcome);
    }
}

impl TrieRangeVerifier for MockVerifier {
    fn verify_account_range(
        &self,
        _root: B256,
        _starting_path: B256,
        _accounts: &[AccountRangeEntry],
        _proof: &[Bytes],
    ) -> Result<AccountRangeOutcome, RangeProofError> {
        self.account_outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(RangeProofError::new("no scripted account range outcome")))
    }

    fn verify_storage_range(
        &self,
        _root: B256,
        _starting_path: B256,
        _slots: &[StorageSlotEntry],
        _proof: &[Bytes],
    ) -> Result<StorageRangeOutcome, RangeProofError> {
        self.storage_outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(RangeProofError::new("no scripted storage range outcome")))
    }
}

/// An in-memory flat store.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    accounts: Mutex<HashMap<B256, Bytes>>,
    code: Mutex<HashMap<B256, Bytes>>,
    fail_writes: AtomicBool,
}

impl InMemoryStateStore {
    /// Number of stored account records.
    pub fn account_count(&self) -> usize {
        self.accounts.lock().len()
    }

    /// Copy of all stored account records, for idempotence assertions.
    pub fn accounts_snapshot(&self) -> HashMap<B256, Bytes> {
        self.accounts.lock().clone()
    }

    /// Makes every subsequent write fail, for exercising persistence error
    /// paths.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StoreError::new("write rejected"))
        }
        Ok(())
    }
}

impl StateStore for InMemoryStateStore {
    fn put_account(&self, path: B256, encoded: Bytes) -> Result<(), StoreError> {
        self.check_writable()?;
        self.accounts.lock().insert(path, encoded);
        Ok(())
    }

    fn put_code(&self, code_hash: B256, code: Bytes) -> Result<(), StoreError> {
        self.check_writable()?;
        self.code.lock().insert(code_hash, code);
        Ok(())
    }

    fn account(&self, path: B256) -> Result<Option<Bytes>, StoreError> {
        Ok(self.accounts.lock().get(&path).cloned())
    }

    fn code(&self, code_hash: B256) -> Result<Option<Bytes>, StoreError> {
        Ok(self.code.lock().get(&code_hash).cloned())
    }
}
