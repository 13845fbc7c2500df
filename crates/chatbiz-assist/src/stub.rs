// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stub assist adapter: templated responses behind fixed artificial delays.
//!
//! Models asynchronous I/O without a backend. Every operation resolves;
//! the `Result` in the port signature exists for real implementations.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::time::sleep;
use tracing::debug;

use chatbiz_core::{
    AdapterType, AssistAdapter, BehaviorAnalysis, ChatbizAdapter, ChatbizError, ComposeRequest,
    Conversation, CustomerProfile, HealthStatus, Tone,
};

use crate::composer;

/// Per-operation artificial delays for the stub adapter.
#[derive(Debug, Clone, Copy)]
pub struct AssistDelays {
    pub translate: Duration,
    pub reply: Duration,
    pub summary: Duration,
    pub analyze: Duration,
    pub compose: Duration,
    pub polish: Duration,
}

impl Default for AssistDelays {
    fn default() -> Self {
        Self {
            translate: Duration::from_millis(800),
            reply: Duration::from_millis(1200),
            summary: Duration::from_millis(1500),
            analyze: Duration::from_millis(1000),
            compose: Duration::from_millis(900),
            polish: Duration::from_millis(600),
        }
    }
}

impl AssistDelays {
    /// All-zero delays, for tests and interactive demos.
    pub fn zero() -> Self {
        Self {
            translate: Duration::ZERO,
            reply: Duration::ZERO,
            summary: Duration::ZERO,
            analyze: Duration::ZERO,
            compose: Duration::ZERO,
            polish: Duration::ZERO,
        }
    }
}

/// An assist adapter that synthesizes templated responses after a fixed delay.
#[derive(Debug, Default)]
pub struct StubAssist {
    delays: AssistDelays,
}

impl StubAssist {
    /// Stub with the standard artificial delays.
    pub fn new() -> Self {
        Self { delays: AssistDelays::default() }
    }

    /// Stub with custom per-operation delays.
    pub fn with_delays(delays: AssistDelays) -> Self {
        Self { delays }
    }

    /// Stub that resolves immediately.
    pub fn immediate() -> Self {
        Self { delays: AssistDelays::zero() }
    }
}

#[async_trait]
impl ChatbizAdapter for StubAssist {
    fn name(&self) -> &str {
        "stub-assist"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Assist
    }

    async fn health_check(&self) -> Result<HealthStatus, ChatbizError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ChatbizError> {
        Ok(())
    }
}

#[async_trait]
impl AssistAdapter for StubAssist {
    async fn translate(
        &self,
        content: &str,
        target_language: &str,
    ) -> Result<String, ChatbizError> {
        sleep(self.delays.translate).await;
        debug!(target = %target_language, "stub translation produced");
        Ok(format!("[{target_language}] {content}"))
    }

    async fn draft_reply(&self, conversation: &Conversation) -> Result<String, ChatbizError> {
        sleep(self.delays.reply).await;
        let name = &conversation.customer.name;
        let reply = match conversation.last_message() {
            Some(last) => format!(
                "您好 {name}！感谢您的耐心等待，关于您提到的「{}」，我们会尽快为您跟进处理。",
                last.content
            ),
            None => format!("您好 {name}！请问有什么可以帮您？"),
        };
        debug!(conversation = %conversation.id.0, "stub reply drafted");
        Ok(reply)
    }

    async fn summarize(&self, conversation: &Conversation) -> Result<String, ChatbizError> {
        sleep(self.delays.summary).await;
        let summary = format!(
            "客户 {} 的会话共 {} 条消息，当前状态 {}，优先级 {}。",
            conversation.customer.name,
            conversation.messages.len(),
            conversation.status,
            conversation.priority
        );
        debug!(conversation = %conversation.id.0, "stub summary produced");
        Ok(summary)
    }

    async fn analyze_profile(
        &self,
        profile: &CustomerProfile,
    ) -> Result<BehaviorAnalysis, ChatbizError> {
        sleep(self.delays.analyze).await;
        debug!(customer = %profile.id.0, "stub profile analysis produced");
        Ok(BehaviorAnalysis {
            summary: format!(
                "{} 来自 {}，历史订单 {} 笔，偏好 {} 沟通。",
                profile.name,
                profile.country,
                profile.order_history.len(),
                profile.language
            ),
            preferred_contact_times: vec!["上午9-12点".to_string(), "晚上7-10点".to_string()],
            interests: profile.tags.clone(),
            generated_at: Utc::now(),
        })
    }

    async fn compose(&self, request: &ComposeRequest) -> Result<Vec<String>, ChatbizError> {
        sleep(self.delays.compose).await;
        let variants = composer::compose_variants(request);
        debug!(variants = variants.len(), "stub drafts composed");
        Ok(variants)
    }

    async fn polish(&self, content: &str, tone: Tone) -> Result<String, ChatbizError> {
        sleep(self.delays.polish).await;
        Ok(composer::polish_content(content, tone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbiz_core::{
        ConversationId, ConversationStatus, CustomerId, DeliveryStatus, Message, MessageId,
        Platform, Priority, SenderType,
    };

    fn profile() -> CustomerProfile {
        CustomerProfile {
            id: CustomerId("cust-1".into()),
            name: "李娜".into(),
            avatar_url: String::new(),
            email: None,
            phone: None,
            country: "CN".into(),
            language: "zh-CN".into(),
            platform: Platform::Whatsapp,
            tags: vec!["服饰".into()],
            notes: None,
            order_history: Vec::new(),
            behavior: None,
            created_at: Utc::now(),
            last_contact_at: None,
        }
    }

    fn conversation(messages: Vec<Message>) -> Conversation {
        let now = Utc::now();
        Conversation {
            id: ConversationId("c1".into()),
            customer: profile(),
            platform: Platform::Whatsapp,
            messages,
            unread_count: 0,
            status: ConversationStatus::Active,
            priority: Priority::High,
            assigned_to: None,
            tags: Vec::new(),
            is_group: false,
            created_at: now,
            updated_at: now,
            ai_summary: None,
            ai_suggestion: None,
        }
    }

    fn message(content: &str) -> Message {
        Message {
            id: MessageId("m1".into()),
            conversation_id: ConversationId("c1".into()),
            sender_id: "cust-1".into(),
            sender_type: SenderType::Customer,
            content: content.into(),
            original_content: None,
            translated_content: None,
            source_language: None,
            timestamp: Utc::now(),
            status: DeliveryStatus::Unread,
            attachments: Vec::new(),
            is_ai_generated: false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn compose_returns_requested_variant_count() {
        let assist = StubAssist::new();
        let variants = assist
            .compose(&ComposeRequest {
                prompt: "hi".into(),
                knowledge_texts: Vec::new(),
                tone: Tone::Friendly,
                max_variants: 2,
            })
            .await
            .unwrap();
        assert_eq!(variants.len(), 2);
        assert!(!variants[0].contains("（备选"));
        assert!(variants[1].contains("（备选 1）"));
    }

    #[tokio::test(start_paused = true)]
    async fn polish_empty_short_circuits() {
        let assist = StubAssist::new();
        assert_eq!(assist.polish("", Tone::Friendly).await.unwrap(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn reply_references_last_customer_message() {
        let assist = StubAssist::new();
        let convo = conversation(vec![message("物流到哪里了？")]);
        let reply = assist.draft_reply(&convo).await.unwrap();
        assert!(reply.contains("物流到哪里了？"));
        assert!(reply.contains("李娜"));
    }

    #[tokio::test(start_paused = true)]
    async fn reply_for_empty_conversation_greets() {
        let assist = StubAssist::new();
        let reply = assist.draft_reply(&conversation(Vec::new())).await.unwrap();
        assert!(reply.contains("请问有什么可以帮您"));
    }

    #[tokio::test(start_paused = true)]
    async fn translate_tags_target_language() {
        let assist = StubAssist::new();
        let out = assist.translate("hello", "zh-CN").await.unwrap();
        assert!(out.starts_with("[zh-CN]"));
        assert!(out.contains("hello"));
    }

    #[tokio::test(start_paused = true)]
    async fn analyze_reflects_profile_fields() {
        let assist = StubAssist::new();
        let analysis = assist.analyze_profile(&profile()).await.unwrap();
        assert!(analysis.summary.contains("李娜"));
        assert_eq!(analysis.interests, vec!["服饰".to_string()]);
        assert!(!analysis.preferred_contact_times.is_empty());
    }

    #[tokio::test]
    async fn immediate_stub_skips_delays() {
        let assist = StubAssist::immediate();
        let start = std::time::Instant::now();
        let _ = assist.polish("测试", Tone::Casual).await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
