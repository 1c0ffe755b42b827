//! Record filter strategy trait definition.

use crate::domain::{ConsumerRecord, Result};

/// Decides whether a consumed record should be discarded before it reaches a listener.
///
/// `Ok(true)` means discard, `Ok(false)` means admit. An `Err` is a predicate
/// failure and is handed back to the caller untouched.
pub trait RecordFilterStrategy<K, V>: Send + Sync {
    /// Return true if the record should be discarded.
    fn filter(&self, record: &ConsumerRecord<K, V>) -> Result<bool>;

    /// Filter a whole batch, returning the records that should be kept.
    ///
    /// Stops at the first predicate failure.
    fn filter_batch(&self, records: Vec<ConsumerRecord<K, V>>) -> Result<Vec<ConsumerRecord<K, V>>> {
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if !self.filter(&record)? {
                kept.push(record);
            }
        }
        Ok(kept)
    }

    /// Whether a batch that is empty after filtering should still reach the listener.
    fn ignore_empty_batch(&self) -> bool {
        false
    }
}

impl<K, V, F> RecordFilterStrategy<K, V> for F
where
    F: Fn(&ConsumerRecord<K, V>) -> bool + Send + Sync,
{
    fn filter(&self, record: &ConsumerRecord<K, V>) -> Result<bool> {
        Ok(self(record))
    }
}
