//! Record filter strategies.

mod chain;
mod rule_filter;
mod strategy_trait;
mod tombstone_filter;

pub use chain::FilterChain;
pub use rule_filter::{RuleFilter, RuleTarget};
pub use strategy_trait::RecordFilterStrategy;
pub use tombstone_filter::TombstoneFilter;
