//! Configuration validation.

use anyhow::{bail, Result};
use regex::Regex;

use super::Config;
use crate::domain::RuleTarget;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Validate log path
    if config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    // Validate filter rules
    for (i, rule) in config.filters.iter().enumerate() {
        if rule.pattern.is_empty() {
            bail!("filters[{}]: pattern cannot be empty", i);
        }

        if let Err(e) = Regex::new(&rule.pattern) {
            bail!(
                "filters[{}]: invalid regex pattern '{}': {}",
                i,
                rule.pattern,
                e
            );
        }

        let has_header = rule.header.as_deref().is_some_and(|h| !h.is_empty());
        match (rule.target, has_header) {
            (RuleTarget::Header, false) => {
                bail!("filters[{}]: target \"header\" requires a header name", i)
            }
            (RuleTarget::Key | RuleTarget::Value | RuleTarget::Topic, true) => {
                bail!(
                    "filters[{}]: header is only allowed with target \"header\"",
                    i
                )
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterRule;

    fn config_with(rule: FilterRule) -> Config {
        Config {
            filters: vec![rule],
            ..Config::default()
        }
    }

    fn rule(target: RuleTarget, header: Option<&str>, pattern: &str) -> FilterRule {
        FilterRule {
            target,
            header: header.map(str::to_string),
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_valid_rules() {
        assert!(validate(&config_with(rule(RuleTarget::Key, None, "^a"))).is_ok());
        assert!(validate(&config_with(rule(RuleTarget::Header, Some("h"), "x"))).is_ok());
    }

    #[test]
    fn test_empty_pattern() {
        let err = validate(&config_with(rule(RuleTarget::Key, None, ""))).unwrap_err();
        assert!(err.to_string().contains("pattern cannot be empty"));
    }

    #[test]
    fn test_invalid_regex() {
        let err = validate(&config_with(rule(RuleTarget::Value, None, "(a"))).unwrap_err();
        assert!(err.to_string().contains("invalid regex pattern"));
    }

    #[test]
    fn test_header_target_without_name() {
        let err = validate(&config_with(rule(RuleTarget::Header, None, "x"))).unwrap_err();
        assert!(err.to_string().contains("requires a header name"));
        let err = validate(&config_with(rule(RuleTarget::Header, Some(""), "x"))).unwrap_err();
        assert!(err.to_string().contains("requires a header name"));
    }

    #[test]
    fn test_header_name_on_other_target() {
        let err = validate(&config_with(rule(RuleTarget::Key, Some("h"), "x"))).unwrap_err();
        assert!(err.to_string().contains("only allowed"));
    }
}
