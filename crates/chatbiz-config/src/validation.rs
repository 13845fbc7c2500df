// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as known log levels and sane delay bounds.

use crate::diagnostic::ConfigError;
use crate::model::ChatbizConfig;

/// Upper bound on any single assist stub delay.
const MAX_DELAY_MS: u64 = 60_000;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ChatbizConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.agent.log_level.to_lowercase();
    if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of trace/debug/info/warn/error, got `{}`",
                config.agent.log_level
            ),
        });
    }

    if config.agent.locale.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.locale must not be empty".to_string(),
        });
    }

    let delays = [
        ("assist.translate_delay_ms", config.assist.translate_delay_ms),
        ("assist.reply_delay_ms", config.assist.reply_delay_ms),
        ("assist.summary_delay_ms", config.assist.summary_delay_ms),
        ("assist.analyze_delay_ms", config.assist.analyze_delay_ms),
        ("assist.compose_delay_ms", config.assist.compose_delay_ms),
        ("assist.polish_delay_ms", config.assist.polish_delay_ms),
    ];
    for (key, value) in delays {
        if value > MAX_DELAY_MS {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be at most {MAX_DELAY_MS}, got {value}"),
            });
        }
    }

    // UTC offsets in actual use range from -12:00 to +14:00.
    let offset = config.scheduler.timezone_offset_hours;
    if !(-12..=14).contains(&offset) {
        errors.push(ConfigError::Validation {
            message: format!(
                "scheduler.timezone_offset_hours must be in [-12, 14], got {offset}"
            ),
        });
    }

    if config.storage.data_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.data_dir must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&ChatbizConfig::default()).is_ok());
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let mut config = ChatbizConfig::default();
        config.agent.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn all_errors_are_collected_not_fail_fast() {
        let mut config = ChatbizConfig::default();
        config.agent.log_level = "loud".to_string();
        config.scheduler.timezone_offset_hours = 99;
        config.storage.data_dir = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn oversized_delay_is_rejected() {
        let mut config = ChatbizConfig::default();
        config.assist.summary_delay_ms = 120_000;
        assert!(validate_config(&config).is_err());
    }
}
