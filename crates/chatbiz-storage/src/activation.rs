// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Activation-code history: a capped, de-duplicated, most-recently-used list.

use chrono::{DateTime, Utc};
use tracing::debug;

use chatbiz_core::{ActivationRecord, ChatbizError, LocalStore};

/// Maximum number of remembered activation codes.
pub const MAX_HISTORY: usize = 10;

/// Records one activation in the history.
///
/// An existing entry with the same code is replaced (moved to the front with
/// a fresh timestamp); the list stays most-recently-used first and is capped
/// at [`MAX_HISTORY`].
pub fn record_activation(
    history: &mut Vec<ActivationRecord>,
    code: &str,
    organization_name: &str,
    now: DateTime<Utc>,
) {
    history.retain(|r| r.code != code);
    history.insert(
        0,
        ActivationRecord {
            code: code.to_string(),
            organization_name: organization_name.to_string(),
            last_used: now,
        },
    );
    history.truncate(MAX_HISTORY);
}

/// Loads the history, records one activation, and persists the result.
pub async fn remember_activation(
    store: &dyn LocalStore,
    code: &str,
    organization_name: &str,
) -> Result<Vec<ActivationRecord>, ChatbizError> {
    let mut history = store.load_activations().await?;
    record_activation(&mut history, code, organization_name, Utc::now());
    store.save_activations(&history).await?;
    debug!(entries = history.len(), "activation history updated");
    Ok(history)
}
