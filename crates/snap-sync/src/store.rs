//! Seam to the persistent flat key-value store.

use crate::error::StoreError;
use alloy_primitives::{Bytes, B256};

/// Flat state store the provider persists verified entries into.
///
/// Writes are append/overwrite-only per key and must be idempotent:
/// re-applying the same verified range twice leaves the same stored values, so
/// no cross-worker write ordering is required beyond key independence.
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait StateStore: Send + Sync {
    /// Persists the canonical encoding of an account record under its hashed
    /// address.
    fn put_account(&self, path: B256, encoded: Bytes) -> Result<(), StoreError>;

    /// Persists contract bytecode under its hash.
    fn put_code(&self, code_hash: B256, code: Bytes) -> Result<(), StoreError>;

    /// Fetches a previously stored account encoding.
    fn account(&self, path: B256) -> Result<Option<Bytes>, StoreError>;

    /// Fetches previously stored bytecode.
    fn code(&self, code_hash: B256) -> Result<Option<Bytes>, StoreError>;
}
