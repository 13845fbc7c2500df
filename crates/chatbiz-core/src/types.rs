// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common identifiers and enumerations used across the ChatBiz workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub String);

/// Unique identifier for a customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

/// Unique identifier for a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

/// Unique identifier for a platform account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the type of adapter behind a ChatBiz port.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Assist,
    Scheduler,
    Snapshot,
}

/// One of the fixed set of external messaging channels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Whatsapp,
    Telegram,
    Line,
    Messenger,
    Instagram,
    Wechat,
}

/// The store's active platform scope: everything, or a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformScope {
    All,
    Only(Platform),
}

impl PlatformScope {
    /// Whether a conversation on `platform` falls inside this scope.
    pub fn includes(&self, platform: Platform) -> bool {
        match self {
            PlatformScope::All => true,
            PlatformScope::Only(p) => *p == platform,
        }
    }
}

/// Lifecycle state of a conversation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConversationStatus {
    Active,
    Pending,
    Resolved,
    Closed,
}

/// Agent-facing priority of a conversation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Who authored a message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SenderType {
    Customer,
    Agent,
    Ai,
}

/// Delivery status of a message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
    Unread,
}

/// Connection status of a platform account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AccountStatus {
    Online,
    Offline,
    Busy,
    NotLoggedIn,
}

/// Filter dimension for the group/single chat flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatScope {
    All,
    Single,
    Group,
}

impl ChatScope {
    /// Whether a conversation with the given `is_group` flag falls inside this scope.
    pub fn includes(&self, is_group: bool) -> bool {
        match self {
            ChatScope::All => true,
            ChatScope::Single => !is_group,
            ChatScope::Group => is_group,
        }
    }
}

/// Elapsed-time bucket since a conversation's last update.
///
/// Exactly one bucket is selected at a time. The boundaries are asymmetric
/// on purpose: `Yesterday` strictly excludes today's range, while `Week` and
/// `Month` are cumulative from now.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecencyBucket {
    Today,
    Yesterday,
    Week,
    Month,
}

impl RecencyBucket {
    /// Whether the elapsed time since last update falls in this bucket.
    pub fn contains(&self, elapsed: chrono::Duration) -> bool {
        let secs = elapsed.num_seconds();
        match self {
            RecencyBucket::Today => secs <= 24 * 3600,
            RecencyBucket::Yesterday => secs > 24 * 3600 && secs <= 48 * 3600,
            RecencyBucket::Week => secs <= 168 * 3600,
            RecencyBucket::Month => secs <= 720 * 3600,
        }
    }
}

/// Three-valued filter dimension: unconstrained, require-true, or require-false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    #[default]
    Unconstrained,
    RequireTrue,
    RequireFalse,
}

impl TriState {
    /// Whether an observed boolean satisfies this constraint.
    pub fn accepts(&self, observed: bool) -> bool {
        match self {
            TriState::Unconstrained => true,
            TriState::RequireTrue => observed,
            TriState::RequireFalse => !observed,
        }
    }
}

/// Requested tone for composed or polished messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Friendly,
    Professional,
    Casual,
}

/// An inclusive hour-of-day window for scheduled sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl SendWindow {
    /// Midpoint of the window, in minutes after midnight.
    pub fn midpoint_minutes(&self) -> u32 {
        (self.start_hour + self.end_hour) * 60 / 2
    }
}

/// Coarse time-of-day classification for send-time preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    /// The fixed hour window associated with this part of the day.
    pub fn window(&self) -> SendWindow {
        match self {
            DayPart::Morning => SendWindow { start_hour: 9, end_hour: 12 },
            DayPart::Afternoon => SendWindow { start_hour: 15, end_hour: 18 },
            DayPart::Evening => SendWindow { start_hour: 19, end_hour: 22 },
        }
    }
}
