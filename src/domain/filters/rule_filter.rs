//! Regex rule filter implementation.

use std::borrow::Cow;

use regex::Regex;
use serde::Deserialize;

use super::RecordFilterStrategy;
use crate::domain::{JsonRecord, ListenerError, Result};

/// Record field a rule is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleTarget {
    /// Record key
    Key,
    /// Record value (strings raw, anything else as compact JSON)
    Value,
    /// Source topic
    Topic,
    /// A named header
    Header,
}

/// Filter discarding JSON records whose target field matches a regex.
#[derive(Debug)]
pub struct RuleFilter {
    target: RuleTarget,
    header: Option<String>,
    pattern: Regex,
}

impl RuleFilter {
    /// Create a new RuleFilter.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is not a valid regex, or if a header
    /// target has no header name.
    pub fn new(target: RuleTarget, header: Option<&str>, pattern: &str) -> Result<Self> {
        if target == RuleTarget::Header && header.map_or(true, str::is_empty) {
            return Err(ListenerError::InvalidArgument(
                "header rules require a header name".to_string(),
            ));
        }
        Ok(Self {
            target,
            header: header.map(str::to_string),
            pattern: Regex::new(pattern)?,
        })
    }

    /// Extract the text this rule looks at, if the record has it.
    fn subject<'a>(&self, record: &'a JsonRecord) -> Option<Cow<'a, str>> {
        match self.target {
            RuleTarget::Key => record.key.as_deref().map(Cow::Borrowed),
            RuleTarget::Topic => Some(Cow::Borrowed(record.topic.as_str())),
            RuleTarget::Value => record.value.as_ref().map(|value| match value {
                serde_json::Value::String(s) => Cow::Borrowed(s.as_str()),
                other => Cow::Owned(other.to_string()),
            }),
            RuleTarget::Header => self
                .header
                .as_ref()
                .and_then(|name| record.headers.get(name))
                .map(|v| Cow::Borrowed(v.as_str())),
        }
    }
}

impl RecordFilterStrategy<String, serde_json::Value> for RuleFilter {
    fn filter(&self, record: &JsonRecord) -> Result<bool> {
        Ok(self
            .subject(record)
            .is_some_and(|text| self.pattern.is_match(&text)))
    }
}
