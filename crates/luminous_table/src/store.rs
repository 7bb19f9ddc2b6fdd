//! Immutable record collections handed to table views.

use std::ops::Deref;
use std::sync::Arc;

/// An immutable, ordered sequence of records.
///
/// Cloning a store is cheap; every clone shares the same records.
#[derive(Debug)]
pub struct RecordStore<T> {
    records: Arc<[T]>,
}

impl<T> RecordStore<T> {
    /// Create a store from owned records.
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Records in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }
}

impl<T> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Deref for RecordStore<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.records
    }
}

impl<T> From<Vec<T>> for RecordStore<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl<T> FromIterator<T> for RecordStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
