//! chain-table: a fixed-capacity string hash table with one direct slot
//! and one overflow chain per bucket.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: O(1)-average string key/value storage in a table whose size is
//!   chosen once, with every byte it stores owned by the table.
//! - Layers:
//!   - ChainList<T>: singly linked overflow list. Nodes sit in a per-list
//!     `SlotMap` and link through generational keys, so dropping a long
//!     chain never recurses.
//!   - Record (internal): owned `(key, value)` pair with fallible
//!     construction.
//!   - HashTable: `capacity` direct slots plus a parallel array of
//!     optional chains; a bucket is the pair at one index.
//!
//! Constraints
//! - Single-threaded; no internal locking. Callers that share a table
//!   serialize access themselves.
//! - Capacity is fixed. `len() <= capacity()` is a hard cap: a full table
//!   ignores every insert, including overwrites of existing keys.
//! - Indexing uses the additive byte sum of the key modulo capacity. It
//!   collides readily and is meant to.
//!
//! Bucket invariants
//! - At most one record lives in a slot; colliding keys are prepended to
//!   that bucket's chain, newest first.
//! - Keys are unique across slot and chain.
//! - An occupied chain always sits behind an occupied slot: deleting the
//!   slot's record promotes the chain head into the slot, and an emptied
//!   chain is released.
//!
//! Failure model
//! - `InvalidCapacity` and `AllocationFailure` are hard errors; nothing is
//!   partially applied. Record buffers and bucket arrays are reserved with
//!   `try_reserve_exact`, chain nodes with `SlotMap::try_reserve`, before
//!   the table changes.
//! - A full table and a missing key are silent in `insert`/`delete`;
//!   `try_insert`/`try_delete` report them as `Rejected`.
//!
//! Notes and non-goals
//! - No resizing, no rehashing, no public iteration. `dump` and `Display`
//!   render the table for diagnostics.
//! - Keys and values are `&str`; there is no generic key type.

pub mod chain_list;
pub mod error;
mod hash_table;
#[cfg(test)]
mod hash_table_proptest;
mod record;

// Public surface
pub use chain_list::ChainList;
pub use error::{InsertError, Rejected, TableError};
pub use hash_table::{HashTable, Insertion};
