// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scheduler adapter trait for send-time suggestions.

use async_trait::async_trait;

use crate::error::ChatbizError;
use crate::records::SendTimeSuggestion;
use crate::traits::adapter::ChatbizAdapter;

/// Adapter that turns free-text contact-time preferences into a concrete
/// suggested send time.
#[async_trait]
pub trait SchedulerAdapter: ChatbizAdapter {
    /// Suggests a send time for tomorrow from the customer's preferred
    /// contact times, shifted by `tz_offset_hours`.
    ///
    /// Unrecognized preference strings are dropped; with no usable
    /// preferences a degenerate default window is used.
    async fn suggest_send_time(
        &self,
        preferred_times: &[String],
        tz_offset_hours: i32,
    ) -> Result<SendTimeSuggestion, ChatbizError>;
}
