#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Shared value types for snap-style state synchronization.
//!
//! The account/storage state of a chain is pulled from peers as proved, sorted
//! ranges over a 256-bit hash-ordered key space. These types describe the units
//! of that exchange: the immutable range requests a worker dispatches and the
//! entries a range response carries.

mod account;
mod request;

pub use account::{Account, AccountRangeEntry, PathWithAccount, StorageSlotEntry};
pub use request::{AccountRangeRequest, StorageRangeRequest, MAX_PATH, STORAGE_BATCH_SIZE};
