// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `chatbiz suggest` command implementation.
//!
//! Feeds contact-time preferences to the scheduler port. Preferences come
//! from `--pref` flags, or from a behavior analysis of the named
//! conversation's customer when none are given.

use clap::Args;

use chatbiz_assist::StubScheduler;
use chatbiz_config::ChatbizConfig;
use chatbiz_core::{ChatbizError, ConversationId, SchedulerAdapter};

use crate::demo_store;

/// Flags for the `chatbiz suggest` command.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Contact-time preference, e.g. "上午9-12点" (repeatable).
    #[arg(long = "pref")]
    preferences: Vec<String>,

    /// Derive preferences from this conversation's customer instead.
    #[arg(long, conflicts_with = "preferences")]
    conversation: Option<String>,

    /// Timezone offset in whole hours; defaults to the configured value.
    #[arg(long)]
    tz_offset: Option<i32>,
}

/// Run the `chatbiz suggest` command.
pub async fn run_suggest(config: &ChatbizConfig, args: SuggestArgs) -> Result<(), ChatbizError> {
    let preferences = match &args.conversation {
        Some(conversation) => {
            let mut store = demo_store(config);
            let id = ConversationId(conversation.clone());
            let analysis = store.analyze_customer(&id).await?.ok_or_else(|| {
                ChatbizError::Internal(format!("no such conversation: {conversation}"))
            })?;
            analysis.preferred_contact_times
        }
        None => args.preferences,
    };

    let tz_offset = args.tz_offset.unwrap_or(config.scheduler.timezone_offset_hours);
    let suggestion = StubScheduler::new()
        .suggest_send_time(&preferences, tz_offset)
        .await?;

    println!(
        "{} {} (window {:02}:00-{:02}:00)",
        suggestion.date, suggestion.time, suggestion.window.start_hour, suggestion.window.end_hour,
    );
    Ok(())
}
