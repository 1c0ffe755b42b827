//! Domain layer containing core filtering logic.
//!
//! This module contains:
//! - Record types flowing through the consumer pipeline
//! - The filter strategy trait and built-in strategies
//! - Logger with rotation

mod error;
pub mod filters;
pub mod logger;
mod types;

pub use error::{ListenerError, Result};
pub use filters::{FilterChain, RecordFilterStrategy, RuleFilter, RuleTarget, TombstoneFilter};
pub use types::{ConsumerRecord, JsonRecord};
