// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that all ChatBiz port implementations must implement.

use async_trait::async_trait;

use crate::error::ChatbizError;
use crate::types::{AdapterType, HealthStatus};

/// The base trait for all ChatBiz adapters.
///
/// Every adapter (assist, scheduler, snapshot store) must implement this
/// trait, which provides identity, lifecycle, and health check capabilities.
#[async_trait]
pub trait ChatbizAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Returns the type of adapter (assist, scheduler, snapshot).
    fn adapter_type(&self) -> AdapterType;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, ChatbizError>;

    /// Gracefully shuts down the adapter, releasing any held resources.
    async fn shutdown(&self) -> Result<(), ChatbizError>;
}
