//! HashTable: fixed-capacity string map with one direct slot and an overflow
//! chain per bucket.

use crate::chain_list::ChainList;
use crate::error::{InsertError, Rejected, TableError};
use crate::record::Record;
use std::fmt;
use std::io;
use tracing::{debug, trace};

/// Bucket index for `key`: the sum of its bytes modulo `capacity`.
/// `capacity` is non-zero for every table.
pub(crate) fn bucket_index(key: &str, capacity: usize) -> usize {
    key.bytes()
        .fold(0usize, |acc, b| acc.wrapping_add(usize::from(b)))
        % capacity
}

/// What a successful `try_insert` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Added,
    Updated,
}

#[derive(Debug)]
pub struct HashTable {
    capacity: usize,
    count: usize, // live records across slots and chains, never above capacity
    slots: Vec<Option<Record>>,
    chains: Vec<Option<ChainList<Record>>>,
}

impl HashTable {
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity < 1 {
            return Err(TableError::InvalidCapacity);
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);
        let mut chains = Vec::new();
        chains.try_reserve_exact(capacity)?;
        chains.resize_with(capacity, || None);
        debug!(capacity, "hash table created");
        Ok(Self {
            capacity,
            count: 0,
            slots,
            chains,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    fn index_of(&self, key: &str) -> usize {
        bucket_index(key, self.capacity)
    }

    /// Insert or overwrite `key`. A full table or any other rejection is
    /// silently ignored; only allocation failure is reported.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<(), TableError> {
        match self.try_insert(key, value) {
            Ok(_) | Err(InsertError::Rejected(_)) => Ok(()),
            Err(InsertError::Table(e)) => Err(e),
        }
    }

    /// Strict insert. A full table rejects every insert, overwrites of
    /// existing keys included.
    pub fn try_insert(&mut self, key: &str, value: &str) -> Result<Insertion, InsertError> {
        if self.is_full() {
            debug!(key, count = self.count, "insert rejected: table full");
            return Err(Rejected::TableFull.into());
        }
        let index = self.index_of(key);
        match self.slots[index].as_mut() {
            None => {}
            Some(rec) if rec.key() == key => {
                rec.set_value(value)?;
                return Ok(Insertion::Updated);
            }
            Some(_) => return self.insert_into_chain(index, key, value),
        }
        self.slots[index] = Some(Record::new(key, value)?);
        self.count += 1;
        Ok(Insertion::Added)
    }

    fn insert_into_chain(
        &mut self,
        index: usize,
        key: &str,
        value: &str,
    ) -> Result<Insertion, InsertError> {
        let chain = &mut self.chains[index];
        if let Some(rec) = chain.as_mut().and_then(|c| c.find_mut(|r| r.key() == key)) {
            rec.set_value(value)?;
            return Ok(Insertion::Updated);
        }
        let record = Record::new(key, value)?;
        trace!(key, index, "collision, prepending to chain");
        ChainList::push_front(chain, record).map_err(TableError::from)?;
        self.count += 1;
        Ok(Insertion::Added)
    }

    pub fn search(&self, key: &str) -> Option<&str> {
        let index = self.index_of(key);
        let rec = self.slots[index].as_ref()?;
        if rec.key() == key {
            return Some(rec.value());
        }
        self.chains[index]
            .as_ref()?
            .find(|r| r.key() == key)
            .map(Record::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Remove `key` if present; a missing key is ignored.
    pub fn delete(&mut self, key: &str) {
        let _ = self.try_delete(key);
    }

    /// Strict delete returning the removed value.
    ///
    /// Removing the direct slot's record promotes the chain head into the
    /// slot, so an occupied chain always sits behind an occupied slot.
    pub fn try_delete(&mut self, key: &str) -> Result<String, Rejected> {
        if self.is_empty() {
            return Err(Rejected::NotFound);
        }
        let index = self.index_of(key);
        let in_slot = match &self.slots[index] {
            None => return Err(Rejected::NotFound),
            Some(rec) => rec.key() == key,
        };
        let removed = if in_slot {
            let rec = self.slots[index].take();
            self.promote_chain_head(index);
            rec
        } else {
            self.remove_from_chain(index, key)
        };
        match removed {
            Some(rec) => {
                self.count -= 1;
                Ok(rec.into_value())
            }
            None => Err(Rejected::NotFound),
        }
    }

    fn promote_chain_head(&mut self, index: usize) {
        let Some(chain) = self.chains[index].as_mut() else {
            return;
        };
        let promoted = chain.remove_first(|_| true);
        if chain.is_empty() {
            self.chains[index] = None;
        }
        if let Some(rec) = promoted {
            trace!(key = rec.key(), index, "chain head promoted to slot");
            self.slots[index] = Some(rec);
        }
    }

    fn remove_from_chain(&mut self, index: usize, key: &str) -> Option<Record> {
        let chain = self.chains[index].as_mut()?;
        let removed = chain.remove_first(|r| r.key() == key)?;
        if chain.is_empty() {
            self.chains[index] = None;
        }
        trace!(key, index, "removed from chain");
        Some(removed)
    }

    /// Drop every record and chain, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.chains.iter_mut().for_each(|c| *c = None);
        self.count = 0;
        debug!(capacity = self.capacity, "hash table cleared");
    }

    /// Write every populated bucket to `out`: index order, direct slot
    /// first, then its chain head to tail.
    pub fn dump<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

#[cfg(test)]
impl HashTable {
    pub(crate) fn slot(&self, index: usize) -> Option<&Record> {
        self.slots[index].as_ref()
    }

    pub(crate) fn chain(&self, index: usize) -> Option<&ChainList<Record>> {
        self.chains[index].as_ref()
    }
}

impl fmt::Display for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (slot, chain)) in self.slots.iter().zip(&self.chains).enumerate() {
            if let Some(rec) = slot {
                writeln!(f, "Index={}\tKey: {}, Value: {}", index, rec.key(), rec.value())?;
            }
            if let Some(chain) = chain {
                for rec in chain {
                    writeln!(f, "\tKey: {}, Value: {}", rec.key(), rec.value())?;
                }
            }
        }
        Ok(())
    }
}
