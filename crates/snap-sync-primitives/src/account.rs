use alloy_consensus::constants::KECCAK_EMPTY;
use alloy_primitives::{Bytes, B256, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use alloy_trie::EMPTY_ROOT_HASH;
use serde::{Deserialize, Serialize};

/// An account record as served by state range responses.
///
/// Range responses carry the full trie leaf, not the execution-layer account:
/// the declared storage root and code hash are what schedule the follow-up
/// storage and bytecode retrieval. Field order matches the canonical RLP leaf
/// encoding.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, RlpEncodable, RlpDecodable,
)]
pub struct Account {
    /// Account nonce.
    pub nonce: u64,
    /// Account balance.
    pub balance: U256,
    /// Root of the account's storage trie.
    pub storage_root: B256,
    /// Hash of the account's bytecode.
    pub code_hash: B256,
}

impl Account {
    /// The distinguished totally-empty account: zero nonce and balance, empty
    /// storage trie, no code.
    pub const TOTALLY_EMPTY: Self = Self {
        nonce: 0,
        balance: U256::ZERO,
        storage_root: EMPTY_ROOT_HASH,
        code_hash: KECCAK_EMPTY,
    };

    /// Whether the account has a non-empty storage trie.
    pub fn has_storage(&self) -> bool {
        self.storage_root != EMPTY_ROOT_HASH
    }

    /// Whether the account carries bytecode.
    pub fn has_code(&self) -> bool {
        self.code_hash != KECCAK_EMPTY
    }

    /// Whether every field matches [`Self::TOTALLY_EMPTY`].
    pub fn is_totally_empty(&self) -> bool {
        *self == Self::TOTALLY_EMPTY
    }

    /// Canonical RLP encoding of the record.
    ///
    /// Totally-empty accounts always encode through [`Self::TOTALLY_EMPTY`] so
    /// that re-applying a range is byte-for-byte idempotent in the flat store.
    pub fn encode_canonical(&self) -> Bytes {
        let canonical = if self.is_totally_empty() { Self::TOTALLY_EMPTY } else { *self };
        alloy_rlp::encode(canonical).into()
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::TOTALLY_EMPTY
    }
}

/// One entry of an account range response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRangeEntry {
    /// Hashed address, the entry's path in the account trie.
    pub path: B256,
    /// The account record. Absent for proof-only boundary entries, which
    /// authenticate the range edge without contributing data.
    pub account: Option<Account>,
}

impl AccountRangeEntry {
    /// An entry carrying an account record.
    pub const fn new(path: B256, account: Account) -> Self {
        Self { path, account: Some(account) }
    }

    /// A proof-only boundary entry.
    pub const fn boundary(path: B256) -> Self {
        Self { path, account: None }
    }
}

/// An account addressed by its path, as scheduled for storage sync.
///
/// Storage sync is keyed by account, not by account range: every queued unit
/// of storage work carries the account it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathWithAccount {
    /// Hashed address of the account.
    pub path: B256,
    /// The account record, including its declared storage root.
    pub account: Account,
}

impl PathWithAccount {
    /// Pairs an account record with its path.
    pub const fn new(path: B256, account: Account) -> Self {
        Self { path, account }
    }
}

/// One entry of a storage range response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSlotEntry {
    /// Hashed storage slot, the entry's path in the account's storage trie.
    pub path: B256,
    /// Encoded slot value.
    pub value: Bytes,
}

impl StorageSlotEntry {
    /// Pairs a slot value with its path.
    pub const fn new(path: B256, value: Bytes) -> Self {
        Self { path, value }
    }
}
