// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Send-time suggestion: classify free-text contact preferences into fixed
//! hour windows and pick the majority window for tomorrow.

use async_trait::async_trait;
use chrono::{DateTime, Days, Utc};
use tracing::debug;

use chatbiz_core::{
    AdapterType, ChatbizAdapter, ChatbizError, DayPart, HealthStatus, SchedulerAdapter,
    SendTimeSuggestion, SendWindow,
};

/// Window used when no preference string could be classified.
const DEFAULT_WINDOW: SendWindow = SendWindow { start_hour: 10, end_hour: 10 };

/// Classifies one preference display string into a part of the day.
///
/// Matching is by substring over the display text the upstream data model
/// carries (e.g. "上午9-12点"); unrecognized strings yield `None`.
pub fn classify(preference: &str) -> Option<DayPart> {
    if preference.contains("上午") {
        Some(DayPart::Morning)
    } else if preference.contains("下午") {
        Some(DayPart::Afternoon)
    } else if preference.contains("晚上") || preference.contains("夜") {
        Some(DayPart::Evening)
    } else {
        None
    }
}

/// Picks the window with the most votes.
///
/// Comparison is strict `>`, so on a tie the bucket seen first in the
/// preference list wins. No classified preferences yields the degenerate
/// default window.
pub fn pick_window(preferred_times: &[String]) -> SendWindow {
    let mut votes: Vec<(DayPart, u32)> = Vec::new();
    for preference in preferred_times {
        if let Some(part) = classify(preference) {
            match votes.iter_mut().find(|(p, _)| *p == part) {
                Some((_, count)) => *count += 1,
                None => votes.push((part, 1)),
            }
        }
    }

    let mut best: Option<(DayPart, u32)> = None;
    for (part, count) in votes {
        match best {
            Some((_, best_count)) if count > best_count => best = Some((part, count)),
            None => best = Some((part, count)),
            _ => {}
        }
    }

    best.map_or(DEFAULT_WINDOW, |(part, _)| part.window())
}

/// Computes the suggestion for tomorrow relative to `now`.
///
/// The time is the window midpoint shifted by `tz_offset_hours`, wrapped
/// within the day.
pub fn suggest_at(
    preferred_times: &[String],
    tz_offset_hours: i32,
    now: DateTime<Utc>,
) -> SendTimeSuggestion {
    let window = pick_window(preferred_times);
    let shifted =
        (window.midpoint_minutes() as i32 + tz_offset_hours * 60).rem_euclid(24 * 60) as u32;
    let date = (now.date_naive() + Days::new(1)).format("%Y-%m-%d").to_string();
    SendTimeSuggestion {
        date,
        time: format!("{:02}:{:02}", shifted / 60, shifted % 60),
        window,
    }
}

/// Deterministic scheduler adapter over the fixed window table.
#[derive(Debug, Default)]
pub struct StubScheduler;

impl StubScheduler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatbizAdapter for StubScheduler {
    fn name(&self) -> &str {
        "stub-scheduler"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Scheduler
    }

    async fn health_check(&self) -> Result<HealthStatus, ChatbizError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ChatbizError> {
        Ok(())
    }
}

#[async_trait]
impl SchedulerAdapter for StubScheduler {
    async fn suggest_send_time(
        &self,
        preferred_times: &[String],
        tz_offset_hours: i32,
    ) -> Result<SendTimeSuggestion, ChatbizError> {
        let suggestion = suggest_at(preferred_times, tz_offset_hours, Utc::now());
        debug!(
            date = %suggestion.date,
            time = %suggestion.time,
            preferences = preferred_times.len(),
            "send time suggested"
        );
        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn prefs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classify_buckets_by_substring() {
        assert_eq!(classify("上午9-12点"), Some(DayPart::Morning));
        assert_eq!(classify("下午3-6点"), Some(DayPart::Afternoon));
        assert_eq!(classify("晚上7-10点"), Some(DayPart::Evening));
        assert_eq!(classify("深夜"), Some(DayPart::Evening));
        assert_eq!(classify("anytime"), None);
    }

    #[test]
    fn majority_vote_picks_morning() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
        let suggestion = suggest_at(
            &prefs(&["上午9-12点", "上午9-12点", "下午3-6点"]),
            0,
            now,
        );
        assert_eq!(suggestion.date, "2026-08-24");
        assert_eq!(suggestion.time, "10:30");
        assert_eq!(suggestion.window, SendWindow { start_hour: 9, end_hour: 12 });
    }

    #[test]
    fn tie_goes_to_first_seen_bucket() {
        let window = pick_window(&prefs(&["下午3-6点", "上午9-12点"]));
        assert_eq!(window, SendWindow { start_hour: 15, end_hour: 18 });
    }

    #[test]
    fn no_preferences_falls_back_to_default_window() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
        let suggestion = suggest_at(&[], 0, now);
        assert_eq!(suggestion.window, SendWindow { start_hour: 10, end_hour: 10 });
        assert_eq!(suggestion.time, "10:00");
    }

    #[test]
    fn unrecognized_entries_are_dropped() {
        let window = pick_window(&prefs(&["whenever", "随时", "晚上8点"]));
        assert_eq!(window, SendWindow { start_hour: 19, end_hour: 22 });
    }

    #[test]
    fn timezone_offset_shifts_and_wraps() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
        let plus_eight = suggest_at(&prefs(&["上午9-12点"]), 8, now);
        assert_eq!(plus_eight.time, "18:30");

        // Evening midpoint 20:30 plus 8h wraps past midnight.
        let wrapped = suggest_at(&prefs(&["晚上7-10点"]), 8, now);
        assert_eq!(wrapped.time, "04:30");

        let negative = suggest_at(&prefs(&["上午9-12点"]), -11, now);
        assert_eq!(negative.time, "23:30");
    }

    #[tokio::test]
    async fn adapter_is_deterministic_for_same_inputs() {
        let scheduler = StubScheduler::new();
        let input = prefs(&["上午9-12点"]);
        let a = scheduler.suggest_send_time(&input, 0).await.unwrap();
        let b = scheduler.suggest_send_time(&input, 0).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.time, "10:30");
    }
}
