// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversation filter: a composite predicate specification evaluated
//! as a short-circuiting conjunction over a fixed dimension order.
//!
//! Within a multi-valued dimension the semantics are OR (any selected value
//! matches); across dimensions they are AND. An empty dimension means "no
//! constraint". Missing optional fields fail their predicate rather than
//! erroring: the filter never throws.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chatbiz_core::{
    ChatScope, Conversation, ConversationStatus, PlatformScope, Priority, RecencyBucket,
    SenderType, TriState,
};

/// The composite predicate specification applied to narrow the conversation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Allowed conversation statuses; empty = no constraint.
    pub statuses: Vec<ConversationStatus>,
    /// Allowed priorities; empty = no constraint.
    pub priorities: Vec<Priority>,
    /// Conversation tags; at least one must be present when non-empty.
    pub tags: Vec<String>,
    /// Require unread_count > 0.
    pub unread_only: bool,
    /// Require the last message to exist and come from the customer.
    pub unreplied_only: bool,
    /// Group/single chat scope.
    pub chat_scope: ChatScope,
    /// Allowed customer countries; empty = no constraint.
    pub countries: Vec<String>,
    /// Allowed customer language codes; empty = no constraint.
    pub languages: Vec<String>,
    /// Allowed assignees; requires `assigned_to` to be set when non-empty.
    pub assignees: Vec<String>,
    /// Tri-state constraint on order history non-emptiness.
    pub has_order: TriState,
    /// Tri-state constraint on the fixed VIP customer tag.
    pub is_vip: TriState,
    /// Customer tags; at least one must be present when non-empty.
    pub customer_tags: Vec<String>,
    /// Inclusive lower bound on message count.
    pub min_messages: Option<usize>,
    /// Inclusive upper bound on message count.
    pub max_messages: Option<usize>,
    /// Elapsed-time bucket since last update; at most one selected.
    pub recency: Option<RecencyBucket>,
}

impl Default for FilterCriteria {
    /// The fixed default: only status is constrained, to {active, pending}.
    fn default() -> Self {
        Self {
            statuses: vec![ConversationStatus::Active, ConversationStatus::Pending],
            priorities: Vec::new(),
            tags: Vec::new(),
            unread_only: false,
            unreplied_only: false,
            chat_scope: ChatScope::All,
            countries: Vec::new(),
            languages: Vec::new(),
            assignees: Vec::new(),
            has_order: TriState::Unconstrained,
            is_vip: TriState::Unconstrained,
            customer_tags: Vec::new(),
            min_messages: None,
            max_messages: None,
            recency: None,
        }
    }
}

/// A partial criteria update; `None` fields leave the current value untouched.
///
/// Bound fields are doubly optional so an update can also clear them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterUpdate {
    pub statuses: Option<Vec<ConversationStatus>>,
    pub priorities: Option<Vec<Priority>>,
    pub tags: Option<Vec<String>>,
    pub unread_only: Option<bool>,
    pub unreplied_only: Option<bool>,
    pub chat_scope: Option<ChatScope>,
    pub countries: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub assignees: Option<Vec<String>>,
    pub has_order: Option<TriState>,
    pub is_vip: Option<TriState>,
    pub customer_tags: Option<Vec<String>>,
    pub min_messages: Option<Option<usize>>,
    pub max_messages: Option<Option<usize>>,
    pub recency: Option<Option<RecencyBucket>>,
}

impl FilterCriteria {
    /// Merges a partial update into the current criteria, field by field.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(v) = update.statuses {
            self.statuses = v;
        }
        if let Some(v) = update.priorities {
            self.priorities = v;
        }
        if let Some(v) = update.tags {
            self.tags = v;
        }
        if let Some(v) = update.unread_only {
            self.unread_only = v;
        }
        if let Some(v) = update.unreplied_only {
            self.unreplied_only = v;
        }
        if let Some(v) = update.chat_scope {
            self.chat_scope = v;
        }
        if let Some(v) = update.countries {
            self.countries = v;
        }
        if let Some(v) = update.languages {
            self.languages = v;
        }
        if let Some(v) = update.assignees {
            self.assignees = v;
        }
        if let Some(v) = update.has_order {
            self.has_order = v;
        }
        if let Some(v) = update.is_vip {
            self.is_vip = v;
        }
        if let Some(v) = update.customer_tags {
            self.customer_tags = v;
        }
        if let Some(v) = update.min_messages {
            self.min_messages = v;
        }
        if let Some(v) = update.max_messages {
            self.max_messages = v;
        }
        if let Some(v) = update.recency {
            self.recency = v;
        }
    }

    /// Evaluates the full predicate conjunction for one conversation.
    ///
    /// Predicates run in a fixed order and short-circuit on first failure.
    /// Pure: no store state is touched.
    pub fn matches(
        &self,
        conversation: &Conversation,
        scope: PlatformScope,
        search: &str,
        now: DateTime<Utc>,
    ) -> bool {
        // 1. Platform scope.
        if !scope.includes(conversation.platform) {
            return false;
        }

        // 2. Status.
        if !self.statuses.is_empty() && !self.statuses.contains(&conversation.status) {
            return false;
        }

        // 3. Priority.
        if !self.priorities.is_empty() && !self.priorities.contains(&conversation.priority) {
            return false;
        }

        // 4. Conversation tags: any selected tag present.
        if !self.tags.is_empty()
            && !self.tags.iter().any(|t| conversation.tags.contains(t))
        {
            return false;
        }

        // 5. Unread only.
        if self.unread_only && conversation.unread_count == 0 {
            return false;
        }

        // 6. Unreplied only: last message must exist and be the customer's.
        if self.unreplied_only
            && conversation
                .last_message()
                .is_none_or(|m| m.sender_type != SenderType::Customer)
        {
            return false;
        }

        // 7. Chat scope (single/group).
        if !self.chat_scope.includes(conversation.is_group) {
            return false;
        }

        // 8. Country / language membership.
        if !self.countries.is_empty() && !self.countries.contains(&conversation.customer.country)
        {
            return false;
        }
        if !self.languages.is_empty() && !self.languages.contains(&conversation.customer.language)
        {
            return false;
        }

        // 9. Assignee: must be set and selected.
        if !self.assignees.is_empty()
            && conversation
                .assigned_to
                .as_ref()
                .is_none_or(|a| !self.assignees.contains(a))
        {
            return false;
        }

        // 10. Order history tri-state.
        if !self.has_order.accepts(!conversation.customer.order_history.is_empty()) {
            return false;
        }

        // 11. VIP tri-state.
        if !self.is_vip.accepts(conversation.customer.is_vip()) {
            return false;
        }

        // 12. Customer tags: any selected tag present.
        if !self.customer_tags.is_empty()
            && !self
                .customer_tags
                .iter()
                .any(|t| conversation.customer.tags.contains(t))
        {
            return false;
        }

        // 13. Message count bounds, both inclusive.
        let count = conversation.messages.len();
        if self.min_messages.is_some_and(|min| count < min) {
            return false;
        }
        if self.max_messages.is_some_and(|max| count > max) {
            return false;
        }

        // 14. Recency bucket on time since last update.
        if let Some(bucket) = self.recency
            && !bucket.contains(now - conversation.updated_at)
        {
            return false;
        }

        // 15. Free-text search over customer name and message contents.
        if !search.is_empty() {
            let needle = search.to_lowercase();
            let name_hit = conversation.customer.name.to_lowercase().contains(&needle);
            let message_hit = conversation
                .messages
                .iter()
                .any(|m| m.content.to_lowercase().contains(&needle));
            if !name_hit && !message_hit {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbiz_core::{
        ConversationId, CustomerId, CustomerProfile, DeliveryStatus, Message, MessageId,
        OrderRecord, Platform, VIP_TAG,
    };
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn customer() -> CustomerProfile {
        CustomerProfile {
            id: CustomerId("cust-1".into()),
            name: "王芳".into(),
            avatar_url: String::new(),
            email: None,
            phone: None,
            country: "CN".into(),
            language: "zh-CN".into(),
            platform: Platform::Whatsapp,
            tags: vec!["老客户".into()],
            notes: None,
            order_history: Vec::new(),
            behavior: None,
            created_at: now(),
            last_contact_at: None,
        }
    }

    fn message(content: &str, sender: SenderType) -> Message {
        Message {
            id: MessageId("m".into()),
            conversation_id: ConversationId("c1".into()),
            sender_id: "s".into(),
            sender_type: sender,
            content: content.into(),
            original_content: None,
            translated_content: None,
            source_language: None,
            timestamp: now(),
            status: DeliveryStatus::Delivered,
            attachments: Vec::new(),
            is_ai_generated: false,
        }
    }

    fn conversation() -> Conversation {
        Conversation {
            id: ConversationId("c1".into()),
            customer: customer(),
            platform: Platform::Whatsapp,
            messages: vec![message("请问发货了吗", SenderType::Customer)],
            unread_count: 2,
            status: ConversationStatus::Active,
            priority: Priority::High,
            assigned_to: Some("agent-li".into()),
            tags: vec!["物流".into()],
            is_group: false,
            created_at: now(),
            updated_at: now(),
            ai_summary: None,
            ai_suggestion: None,
        }
    }

    fn check(criteria: &FilterCriteria, convo: &Conversation) -> bool {
        criteria.matches(convo, PlatformScope::All, "", now())
    }

    #[test]
    fn default_criteria_accept_active_and_pending_only() {
        let criteria = FilterCriteria::default();
        let mut convo = conversation();
        assert!(check(&criteria, &convo));
        convo.status = ConversationStatus::Pending;
        assert!(check(&criteria, &convo));
        convo.status = ConversationStatus::Resolved;
        assert!(!check(&criteria, &convo));
        convo.status = ConversationStatus::Closed;
        assert!(!check(&criteria, &convo));
    }

    #[test]
    fn platform_scope_is_checked_first() {
        let criteria = FilterCriteria::default();
        let convo = conversation();
        assert!(criteria.matches(&convo, PlatformScope::Only(Platform::Whatsapp), "", now()));
        assert!(!criteria.matches(&convo, PlatformScope::Only(Platform::Telegram), "", now()));
    }

    #[test]
    fn tags_are_or_within_the_dimension() {
        let criteria = FilterCriteria {
            tags: vec!["售后".into(), "物流".into()],
            ..FilterCriteria::default()
        };
        let convo = conversation(); // has only 物流
        assert!(check(&criteria, &convo));

        let none = FilterCriteria { tags: vec!["投诉".into()], ..FilterCriteria::default() };
        assert!(!check(&none, &convo));
    }

    #[test]
    fn unread_only_requires_positive_count() {
        let criteria = FilterCriteria { unread_only: true, ..FilterCriteria::default() };
        let mut convo = conversation();
        assert!(check(&criteria, &convo));
        convo.unread_count = 0;
        assert!(!check(&criteria, &convo));
    }

    #[test]
    fn unreplied_only_checks_last_sender() {
        let criteria = FilterCriteria { unreplied_only: true, ..FilterCriteria::default() };
        let mut convo = conversation();
        assert!(check(&criteria, &convo));

        convo.messages.push(message("已发货", SenderType::Agent));
        assert!(!check(&criteria, &convo));

        convo.messages.clear();
        assert!(!check(&criteria, &convo));
    }

    #[test]
    fn assignee_must_be_defined_and_selected() {
        let criteria =
            FilterCriteria { assignees: vec!["agent-li".into()], ..FilterCriteria::default() };
        let mut convo = conversation();
        assert!(check(&criteria, &convo));

        convo.assigned_to = Some("agent-zhao".into());
        assert!(!check(&criteria, &convo));

        convo.assigned_to = None;
        assert!(!check(&criteria, &convo));
    }

    #[test]
    fn has_order_tri_state() {
        let mut convo = conversation();
        let require = FilterCriteria {
            has_order: TriState::RequireTrue,
            ..FilterCriteria::default()
        };
        let forbid = FilterCriteria {
            has_order: TriState::RequireFalse,
            ..FilterCriteria::default()
        };
        assert!(!check(&require, &convo));
        assert!(check(&forbid, &convo));

        convo.customer.order_history.push(OrderRecord {
            id: "o1".into(),
            description: "连衣裙".into(),
            amount: 299.0,
            placed_at: now(),
        });
        assert!(check(&require, &convo));
        assert!(!check(&forbid, &convo));
    }

    #[test]
    fn is_vip_tri_state_uses_fixed_tag() {
        let mut convo = conversation();
        let require = FilterCriteria { is_vip: TriState::RequireTrue, ..FilterCriteria::default() };
        assert!(!check(&require, &convo));
        convo.customer.tags.push(VIP_TAG.to_string());
        assert!(check(&require, &convo));
    }

    #[test]
    fn message_count_bounds_are_inclusive() {
        let mut convo = conversation();
        convo.messages.push(message("还没呢", SenderType::Agent));
        // exactly 2 messages
        let criteria = FilterCriteria {
            min_messages: Some(2),
            max_messages: Some(2),
            ..FilterCriteria::default()
        };
        assert!(check(&criteria, &convo));

        let too_low = FilterCriteria { max_messages: Some(1), ..FilterCriteria::default() };
        assert!(!check(&too_low, &convo));
        let too_high = FilterCriteria { min_messages: Some(3), ..FilterCriteria::default() };
        assert!(!check(&too_high, &convo));
    }

    #[test]
    fn recency_buckets_apply_to_updated_at() {
        let reference = now();
        let mut convo = conversation();
        convo.updated_at = reference - Duration::hours(30);

        let yesterday =
            FilterCriteria { recency: Some(RecencyBucket::Yesterday), ..FilterCriteria::default() };
        let today =
            FilterCriteria { recency: Some(RecencyBucket::Today), ..FilterCriteria::default() };
        let week =
            FilterCriteria { recency: Some(RecencyBucket::Week), ..FilterCriteria::default() };

        assert!(yesterday.matches(&convo, PlatformScope::All, "", reference));
        assert!(!today.matches(&convo, PlatformScope::All, "", reference));
        // Week is cumulative, so a 30h-old conversation passes it too.
        assert!(week.matches(&convo, PlatformScope::All, "", reference));
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_messages() {
        let criteria = FilterCriteria::default();
        let mut convo = conversation();
        convo.messages.push(message("Order #A123 Shipped", SenderType::Agent));

        assert!(criteria.matches(&convo, PlatformScope::All, "王芳", now()));
        assert!(criteria.matches(&convo, PlatformScope::All, "a123", now()));
        assert!(!criteria.matches(&convo, PlatformScope::All, "refund", now()));
    }

    #[test]
    fn merge_only_touches_provided_fields() {
        let mut criteria = FilterCriteria::default();
        criteria.merge(FilterUpdate {
            unread_only: Some(true),
            min_messages: Some(Some(1)),
            ..FilterUpdate::default()
        });
        assert!(criteria.unread_only);
        assert_eq!(criteria.min_messages, Some(1));
        // Untouched dimension keeps the default.
        assert_eq!(
            criteria.statuses,
            vec![ConversationStatus::Active, ConversationStatus::Pending]
        );

        // A doubly-optional field can be cleared explicitly.
        criteria.merge(FilterUpdate { min_messages: Some(None), ..FilterUpdate::default() });
        assert_eq!(criteria.min_messages, None);
    }
}
