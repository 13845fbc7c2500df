// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local snapshot persistence port.
//!
//! Two independent entries survive a restart: the three-field settings
//! snapshot and the capped activation-code history. Writes are
//! fire-and-forget, last write wins; a missing entry loads as `None`/empty.

use async_trait::async_trait;

use crate::error::ChatbizError;
use crate::records::{ActivationRecord, Snapshot};
use crate::traits::adapter::ChatbizAdapter;

/// Adapter for the local key-value snapshot.
#[async_trait]
pub trait LocalStore: ChatbizAdapter {
    /// Loads the settings snapshot, or `None` if nothing was persisted yet.
    async fn load_snapshot(&self) -> Result<Option<Snapshot>, ChatbizError>;

    /// Persists the settings snapshot, replacing any previous one.
    async fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), ChatbizError>;

    /// Loads the activation-code history, most-recently-used first.
    async fn load_activations(&self) -> Result<Vec<ActivationRecord>, ChatbizError>;

    /// Persists the activation-code history, replacing any previous list.
    async fn save_activations(&self, records: &[ActivationRecord]) -> Result<(), ChatbizError>;
}
