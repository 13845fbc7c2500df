// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed local store: two JSON files under a data directory.
//!
//! Writes replace the whole file, last write wins. There is no corruption
//! recovery: an unreadable or missing file loads as `None`/empty.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use chatbiz_core::{
    ActivationRecord, AdapterType, ChatbizAdapter, ChatbizError, HealthStatus, LocalStore,
    Snapshot,
};

/// Fixed storage key for the settings snapshot.
pub const SNAPSHOT_FILE: &str = "chatbiz-settings.json";

/// Fixed storage key for the activation-code history.
pub const ACTIVATIONS_FILE: &str = "chatbiz-activation-codes.json";

/// Helper to convert IO/serde errors into `ChatbizError::Snapshot`.
fn snapshot_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> ChatbizError {
    ChatbizError::Snapshot { source: Box::new(e) }
}

/// Local store persisting JSON files under a data directory.
#[derive(Debug, Clone)]
pub struct FileLocalStore {
    data_dir: PathBuf,
}

impl FileLocalStore {
    /// Creates a store rooted at `data_dir`. The directory is created on
    /// first write, not here.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILE)
    }

    fn activations_path(&self) -> PathBuf {
        self.data_dir.join(ACTIVATIONS_FILE)
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Result<Option<T>, ChatbizError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes).map_err(snapshot_err)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(snapshot_err(e)),
        }
    }

    async fn write_json<T: serde::Serialize>(
        &self,
        path: &Path,
        value: &T,
    ) -> Result<(), ChatbizError> {
        tokio::fs::create_dir_all(&self.data_dir).await.map_err(snapshot_err)?;
        let bytes = serde_json::to_vec_pretty(value).map_err(snapshot_err)?;
        tokio::fs::write(path, bytes).await.map_err(snapshot_err)?;
        debug!(path = %path.display(), "local snapshot written");
        Ok(())
    }
}

#[async_trait]
impl ChatbizAdapter for FileLocalStore {
    fn name(&self) -> &str {
        "file-local-store"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Snapshot
    }

    async fn health_check(&self) -> Result<HealthStatus, ChatbizError> {
        if self.data_dir.exists() || self.data_dir.parent().is_some_and(Path::exists) {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy(format!(
                "data directory {} is unreachable",
                self.data_dir.display()
            )))
        }
    }

    async fn shutdown(&self) -> Result<(), ChatbizError> {
        Ok(())
    }
}

#[async_trait]
impl LocalStore for FileLocalStore {
    async fn load_snapshot(&self) -> Result<Option<Snapshot>, ChatbizError> {
        self.read_json(&self.snapshot_path()).await
    }

    async fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), ChatbizError> {
        self.write_json(&self.snapshot_path(), snapshot).await
    }

    async fn load_activations(&self) -> Result<Vec<ActivationRecord>, ChatbizError> {
        Ok(self.read_json(&self.activations_path()).await?.unwrap_or_default())
    }

    async fn save_activations(&self, records: &[ActivationRecord]) -> Result<(), ChatbizError> {
        self.write_json(&self.activations_path(), &records).await
    }
}
