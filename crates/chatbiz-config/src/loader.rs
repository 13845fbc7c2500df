// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./chatbiz.toml` > `~/.config/chatbiz/chatbiz.toml`
//! > `/etc/chatbiz/chatbiz.toml`, with environment variable overrides via
//! the `CHATBIZ_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ChatbizConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/chatbiz/chatbiz.toml` (system-wide)
/// 3. `~/.config/chatbiz/chatbiz.toml` (user XDG config)
/// 4. `./chatbiz.toml` (local directory)
/// 5. `CHATBIZ_*` environment variables
pub fn load_config() -> Result<ChatbizConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ChatbizConfig::default()))
        .merge(Toml::file("/etc/chatbiz/chatbiz.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("chatbiz/chatbiz.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("chatbiz.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<ChatbizConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ChatbizConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ChatbizConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ChatbizConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `CHATBIZ_ASSIST_REPLY_DELAY_MS` must map
/// to `assist.reply_delay_ms`, not `assist.reply.delay.ms`.
fn env_provider() -> Env {
    Env::prefixed("CHATBIZ_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("assist_", "assist.", 1)
            .replacen("scheduler_", "scheduler.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
