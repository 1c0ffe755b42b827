//! filtering-listener: conditional record admission for consumer pipelines
//!
//! A [`FilteringListener`] wraps a delegate listener together with a
//! [`RecordFilterStrategy`] and drops the records the strategy discards.
//! Filtering can be bypassed at runtime when the owning container already
//! filters records itself.

pub mod config;
pub mod domain;
pub mod listener;
pub mod service;

pub use domain::{
    ConsumerRecord, FilterChain, JsonRecord, ListenerError, RecordFilterStrategy, RuleFilter,
    RuleTarget, TombstoneFilter,
};
pub use listener::{BatchMessageListener, FilteringListener, MessageListener, SharedStrategy};
