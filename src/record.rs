//! Record: an owned key/value pair stored by the table.

use crate::error::TableError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    key: String,
    value: String,
}

/// Copy `s` into a freshly reserved buffer, reporting allocation failure
/// instead of aborting.
fn owned_copy(s: &str) -> Result<String, TableError> {
    let mut buf = String::new();
    buf.try_reserve_exact(s.len())?;
    buf.push_str(s);
    Ok(buf)
}

impl Record {
    /// Build a record holding owned copies of `key` and `value`.
    pub fn new(key: &str, value: &str) -> Result<Self, TableError> {
        let key = owned_copy(key)?;
        let value = owned_copy(value)?;
        Ok(Self { key, value })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the stored value. The current buffer is reused when it is
    /// large enough; otherwise a new one is reserved first, so a failure
    /// leaves the old value intact.
    pub fn set_value(&mut self, value: &str) -> Result<(), TableError> {
        if self.value.capacity() >= value.len() {
            self.value.clear();
            self.value.push_str(value);
        } else {
            self.value = owned_copy(value)?;
        }
        Ok(())
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }
}
