// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory local store for tests and ephemeral sessions.

use async_trait::async_trait;
use tokio::sync::Mutex;

use chatbiz_core::{
    ActivationRecord, AdapterType, ChatbizAdapter, ChatbizError, HealthStatus, LocalStore,
    Snapshot,
};

/// A `LocalStore` that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryLocalStore {
    snapshot: Mutex<Option<Snapshot>>,
    activations: Mutex<Vec<ActivationRecord>>,
}

impl MemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatbizAdapter for MemoryLocalStore {
    fn name(&self) -> &str {
        "memory-local-store"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Snapshot
    }

    async fn health_check(&self) -> Result<HealthStatus, ChatbizError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ChatbizError> {
        Ok(())
    }
}

#[async_trait]
impl LocalStore for MemoryLocalStore {
    async fn load_snapshot(&self) -> Result<Option<Snapshot>, ChatbizError> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), ChatbizError> {
        *self.snapshot.lock().await = Some(snapshot.clone());
        Ok(())
    }

    async fn load_activations(&self) -> Result<Vec<ActivationRecord>, ChatbizError> {
        Ok(self.activations.lock().await.clone())
    }

    async fn save_activations(&self, records: &[ActivationRecord]) -> Result<(), ChatbizError> {
        *self.activations.lock().await = records.to_vec();
        Ok(())
    }
}
