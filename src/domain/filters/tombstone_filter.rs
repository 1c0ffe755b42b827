//! Tombstone record filter implementation.

use super::RecordFilterStrategy;
use crate::domain::{ConsumerRecord, Result};

/// Filter discarding records that carry no value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TombstoneFilter;

impl TombstoneFilter {
    /// Create a new TombstoneFilter.
    pub fn new() -> Self {
        Self
    }
}

impl<K, V> RecordFilterStrategy<K, V> for TombstoneFilter {
    fn filter(&self, record: &ConsumerRecord<K, V>) -> Result<bool> {
        Ok(record.is_tombstone())
    }
}
