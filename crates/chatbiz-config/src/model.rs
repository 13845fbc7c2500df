// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for ChatBiz.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level ChatBiz configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChatbizConfig {
    /// Workbench identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Assist stub delay settings.
    #[serde(default)]
    pub assist: AssistConfig,

    /// Send-time scheduler settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Local snapshot storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Workbench identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the workbench instance.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// UI locale, e.g. "zh-CN".
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            locale: default_locale(),
        }
    }
}

fn default_agent_name() -> String {
    "chatbiz".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_locale() -> String {
    "zh-CN".to_string()
}

/// Artificial delay settings for the assist stub, in milliseconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssistConfig {
    #[serde(default = "default_translate_delay_ms")]
    pub translate_delay_ms: u64,

    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    #[serde(default = "default_summary_delay_ms")]
    pub summary_delay_ms: u64,

    #[serde(default = "default_analyze_delay_ms")]
    pub analyze_delay_ms: u64,

    #[serde(default = "default_compose_delay_ms")]
    pub compose_delay_ms: u64,

    #[serde(default = "default_polish_delay_ms")]
    pub polish_delay_ms: u64,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            translate_delay_ms: default_translate_delay_ms(),
            reply_delay_ms: default_reply_delay_ms(),
            summary_delay_ms: default_summary_delay_ms(),
            analyze_delay_ms: default_analyze_delay_ms(),
            compose_delay_ms: default_compose_delay_ms(),
            polish_delay_ms: default_polish_delay_ms(),
        }
    }
}

fn default_translate_delay_ms() -> u64 {
    800
}

fn default_reply_delay_ms() -> u64 {
    1200
}

fn default_summary_delay_ms() -> u64 {
    1500
}

fn default_analyze_delay_ms() -> u64 {
    1000
}

fn default_compose_delay_ms() -> u64 {
    900
}

fn default_polish_delay_ms() -> u64 {
    600
}

/// Send-time scheduler configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Timezone offset in whole hours applied to suggested send times.
    #[serde(default)]
    pub timezone_offset_hours: i32,
}

/// Local snapshot storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding the settings snapshot and activation history.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir() }
    }
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|d| d.join("chatbiz").display().to_string())
        .unwrap_or_else(|| ".chatbiz".to_string())
}
