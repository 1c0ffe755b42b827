//! Filter chain implementation.

use tracing::warn;

use crate::config::Config;
use crate::domain::{ConsumerRecord, Result};

use super::{RecordFilterStrategy, RuleFilter, TombstoneFilter};

/// Ordered chain of strategies; a record is discarded if any member discards it.
pub struct FilterChain<K, V> {
    filters: Vec<Box<dyn RecordFilterStrategy<K, V>>>,
}

impl<K, V> Default for FilterChain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FilterChain<K, V> {
    /// Create an empty chain, which admits every record.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a strategy to the end of the chain.
    pub fn push<S>(&mut self, strategy: S)
    where
        S: RecordFilterStrategy<K, V> + 'static,
    {
        self.filters.push(Box::new(strategy));
    }

    /// Number of strategies in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the chain has no strategies.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl FilterChain<String, serde_json::Value> {
    /// Build the chain described by configuration.
    ///
    /// The tombstone filter runs first, then rules in file order.
    ///
    /// Rules that cannot be built (bad regex, header target without a name)
    /// are skipped with a warning, so the chain may hold fewer rules than
    /// `config.filters`. Run [`Config::validate`] first to reject them instead;
    /// `ConfigService::load` already does.
    pub fn from_config(config: &Config) -> Self {
        let mut chain = Self::new();

        if config.discard_tombstones {
            chain.push(TombstoneFilter::new());
        }

        for (i, rule) in config.filters.iter().enumerate() {
            match RuleFilter::new(rule.target, rule.header.as_deref(), &rule.pattern) {
                Ok(filter) => chain.push(filter),
                Err(e) => {
                    warn!("Skipping filters[{}]: {}", i, e);
                    continue;
                }
            }
        }

        chain
    }
}

impl<K, V> RecordFilterStrategy<K, V> for FilterChain<K, V> {
    fn filter(&self, record: &ConsumerRecord<K, V>) -> Result<bool> {
        for filter in &self.filters {
            if filter.filter(record)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
