// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain records shared across the ChatBiz workspace.
//!
//! These are plain data records; all mutation is funneled through the
//! application store in `chatbiz-store`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    AccountId, AccountStatus, ConversationId, ConversationStatus, CustomerId, DeliveryStatus,
    MessageId, Platform, Priority, SenderType, SendWindow, Tone,
};

/// The fixed customer tag marking VIP customers.
pub const VIP_TAG: &str = "VIP客户";

/// A file or media item attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

/// A single message inside a conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender_id: String,
    pub sender_type: SenderType,
    /// Display content, possibly already translated.
    pub content: String,
    pub original_content: Option<String>,
    pub translated_content: Option<String>,
    pub source_language: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: DeliveryStatus,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub is_ai_generated: bool,
}

/// A past order placed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub placed_at: DateTime<Utc>,
}

/// AI-produced behavior snapshot for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorAnalysis {
    pub summary: String,
    /// Free-text contact-time preferences as displayed to agents
    /// (e.g. "上午9-12点"); fed verbatim to the send-time scheduler.
    #[serde(default)]
    pub preferred_contact_times: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// A customer's profile as shown in the CRM panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub name: String,
    pub avatar_url: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: String,
    /// BCP-47-ish language code, e.g. "zh-CN".
    pub language: String,
    pub platform: Platform,
    #[serde(default)]
    pub tags: Vec<String>,
    pub notes: Option<String>,
    /// Empty means no recorded orders.
    #[serde(default)]
    pub order_history: Vec<OrderRecord>,
    pub behavior: Option<BehaviorAnalysis>,
    pub created_at: DateTime<Utc>,
    pub last_contact_at: Option<DateTime<Utc>>,
}

impl CustomerProfile {
    /// Whether this customer carries the fixed VIP tag.
    pub fn is_vip(&self) -> bool {
        self.tags.iter().any(|t| t == VIP_TAG)
    }
}

/// A per-customer, per-platform message thread with service metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    /// Embedded profile; not re-resolved by id at filter time.
    pub customer: CustomerProfile,
    pub platform: Platform,
    /// Insertion order is chronological. Appends go through
    /// `AppStore::add_message` only.
    pub messages: Vec<Message>,
    pub unread_count: u32,
    pub status: ConversationStatus,
    pub priority: Priority,
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_group: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ai_summary: Option<String>,
    pub ai_suggestion: Option<String>,
}

impl Conversation {
    /// The most recent message, derived from the tail of `messages`.
    ///
    /// Computed on read rather than stored, so it can never drift out of
    /// sync with the message list.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// A credentialed identity used to converse on a given platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformAccount {
    pub id: AccountId,
    pub platform: Platform,
    pub name: String,
    /// The external platform-side identifier (phone number, bot handle, ...).
    pub external_id: String,
    pub status: AccountStatus,
    pub is_default: bool,
    pub message_count: u64,
    pub ip: Option<String>,
    pub proxy_region: Option<String>,
    pub proxy_config_id: Option<String>,
    #[serde(default)]
    pub remark: String,
}

/// Agent-facing preferences persisted in the local snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub display_name: String,
    pub email: Option<String>,
    pub notifications_enabled: bool,
    pub sound_enabled: bool,
    pub theme: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            email: None,
            notifications_enabled: true,
            sound_enabled: true,
            theme: "light".to_string(),
        }
    }
}

/// The persisted local snapshot: exactly these three fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub user_settings: UserSettings,
    pub sidebar_collapsed: bool,
    pub current_language: String,
}

/// One remembered login activation code, most-recently-used first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRecord {
    pub code: String,
    pub organization_name: String,
    pub last_used: DateTime<Utc>,
}

/// Request for the assist port's message composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRequest {
    pub prompt: String,
    /// Knowledge-base excerpts to embed verbatim; when non-empty the
    /// variants differ only by their numbered suffix.
    pub knowledge_texts: Vec<String>,
    pub tone: Tone,
    pub max_variants: usize,
}

/// A suggested send time produced by the scheduler port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTimeSuggestion {
    /// `YYYY-MM-DD`, always tomorrow relative to the suggestion time.
    pub date: String,
    /// `HH:MM`, midpoint of the chosen window shifted by the timezone offset.
    pub time: String,
    pub window: SendWindow,
}
