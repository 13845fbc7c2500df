// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the ChatBiz workspace.

use thiserror::Error;

/// The primary error type used across all ChatBiz adapter traits and core operations.
///
/// Store lookups and the filter engine never produce errors; an empty or
/// default result is their sole failure signal. This type covers the
/// fallible edges: configuration, snapshot persistence, and assist backends.
#[derive(Debug, Error)]
pub enum ChatbizError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Local snapshot persistence errors (file IO, serialization).
    #[error("snapshot error: {source}")]
    Snapshot {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Assist backend errors (API failure, model not found).
    ///
    /// The bundled stub adapters never return this; it exists for real
    /// backend implementations behind the same port.
    #[error("assist error: {message}")]
    Assist {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
