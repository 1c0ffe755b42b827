//! Listener trait definitions.

use crate::domain::{ConsumerRecord, Result};

/// Receives records one at a time.
pub trait MessageListener<K, V>: Send + Sync {
    /// Handle a single record.
    fn on_message(&self, record: ConsumerRecord<K, V>) -> Result<()>;
}

/// Receives records a poll batch at a time.
pub trait BatchMessageListener<K, V>: Send + Sync {
    /// Handle a batch of records.
    fn on_messages(&self, records: Vec<ConsumerRecord<K, V>>) -> Result<()>;
}
