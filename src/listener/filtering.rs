//! Filtering listener adapter.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::{BatchMessageListener, MessageListener};
use crate::domain::{ConsumerRecord, ListenerError, RecordFilterStrategy, Result};

/// Shared handle to a filter strategy.
pub type SharedStrategy<K, V> = Arc<dyn RecordFilterStrategy<K, V>>;

/// Wraps a delegate listener and drops records the strategy discards.
///
/// Filtering can be bypassed at any time with [`set_skip_filtering`], for
/// instance when the owning container already filters records itself. The
/// flag may be written from one thread while another is dispatching.
///
/// [`set_skip_filtering`]: FilteringListener::set_skip_filtering
pub struct FilteringListener<K, V, L> {
    delegate: L,
    strategy: SharedStrategy<K, V>,
    skip_filtering: AtomicBool,
    discarded: AtomicU64,
}

impl<K, V, L> FilteringListener<K, V, L> {
    /// Create a new FilteringListener.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if no strategy is supplied.
    pub fn new(delegate: L, strategy: Option<SharedStrategy<K, V>>) -> Result<Self> {
        let strategy = strategy.ok_or_else(|| {
            ListenerError::InvalidArgument("a record filter strategy is required".to_string())
        })?;
        Ok(Self {
            delegate,
            strategy,
            skip_filtering: AtomicBool::new(false),
            discarded: AtomicU64::new(0),
        })
    }

    /// Create a new FilteringListener from a concrete strategy.
    pub fn with_strategy<S>(delegate: L, strategy: S) -> Self
    where
        S: RecordFilterStrategy<K, V> + 'static,
    {
        Self {
            delegate,
            strategy: Arc::new(strategy),
            skip_filtering: AtomicBool::new(false),
            discarded: AtomicU64::new(0),
        }
    }

    /// The wrapped listener.
    pub fn delegate(&self) -> &L {
        &self.delegate
    }

    /// The strategy deciding which records are discarded.
    pub fn record_filter_strategy(&self) -> &SharedStrategy<K, V> {
        &self.strategy
    }

    /// Set whether to bypass the strategy and admit every record.
    pub fn set_skip_filtering(&self, skip_filtering: bool) {
        self.skip_filtering.store(skip_filtering, Ordering::Release);
    }

    /// Whether filtering is currently bypassed.
    pub fn is_skip_filtering(&self) -> bool {
        self.skip_filtering.load(Ordering::Acquire)
    }

    /// Number of records discarded so far by this adapter.
    pub fn discarded_count(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }

    /// Decide whether `record` should be discarded.
    ///
    /// Returns `Ok(false)` without consulting the strategy when filtering is
    /// skipped. Strategy errors are returned as is.
    pub fn filter(&self, record: &ConsumerRecord<K, V>) -> Result<bool> {
        if self.is_skip_filtering() {
            return Ok(false);
        }
        self.strategy.filter(record)
    }
}

impl<K, V, L> MessageListener<K, V> for FilteringListener<K, V, L>
where
    L: MessageListener<K, V>,
{
    fn on_message(&self, record: ConsumerRecord<K, V>) -> Result<()> {
        if self.filter(&record)? {
            self.discarded.fetch_add(1, Ordering::Relaxed);
            debug!(
                "Discarded record: topic={}, partition={}, offset={}",
                record.topic, record.partition, record.offset
            );
            return Ok(());
        }

        self.delegate.on_message(record)
    }
}

impl<K, V, L> BatchMessageListener<K, V> for FilteringListener<K, V, L>
where
    L: BatchMessageListener<K, V>,
{
    fn on_messages(&self, records: Vec<ConsumerRecord<K, V>>) -> Result<()> {
        if self.is_skip_filtering() {
            return self.delegate.on_messages(records);
        }

        let received = records.len();
        let kept = self.strategy.filter_batch(records)?;
        // filter_batch overrides may return more records than they received
        let dropped = received.saturating_sub(kept.len());
        if dropped > 0 {
            self.discarded.fetch_add(dropped as u64, Ordering::Relaxed);
            debug!("Discarded {} of {} records in batch", dropped, received);
        }

        if kept.is_empty() && !self.strategy.ignore_empty_batch() {
            debug!("Batch empty after filtering, not delivered");
            return Ok(());
        }

        self.delegate.on_messages(kept)
    }
}

impl<K, V, L: fmt::Debug> fmt::Debug for FilteringListener<K, V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteringListener")
            .field("delegate", &self.delegate)
            .field("skip_filtering", &self.is_skip_filtering())
            .field("discarded", &self.discarded_count())
            .finish()
    }
}
