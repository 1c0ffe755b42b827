//! Core domain types for consumed records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single record delivered by a messaging source.
///
/// Delivery metadata (topic, partition, offset, headers) is opaque to the
/// filtering adapter; only strategies look at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerRecord<K, V> {
    /// Source topic
    pub topic: String,

    /// Partition within the topic
    #[serde(default)]
    pub partition: i32,

    /// Offset within the partition
    #[serde(default)]
    pub offset: i64,

    /// Optional timestamp in milliseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Record key
    #[serde(default)]
    pub key: Option<K>,

    /// Record value (`None` is a tombstone)
    #[serde(default)]
    pub value: Option<V>,

    /// Record headers
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

/// Record type handled by the JSON-lines pipeline.
pub type JsonRecord = ConsumerRecord<String, serde_json::Value>;

impl<K, V> ConsumerRecord<K, V> {
    /// Create a record with the given coordinates and payload, no timestamp and no headers.
    pub fn new(
        topic: impl Into<String>,
        partition: i32,
        offset: i64,
        key: Option<K>,
        value: Option<V>,
    ) -> Self {
        Self {
            topic: topic.into(),
            partition,
            offset,
            timestamp: None,
            key,
            value,
            headers: BTreeMap::new(),
        }
    }

    /// Add a header, replacing any previous value for the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Whether this record carries no value.
    pub fn is_tombstone(&self) -> bool {
        self.value.is_none()
    }
}
