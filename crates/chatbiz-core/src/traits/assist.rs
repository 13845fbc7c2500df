// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assist adapter trait: the injectable async boundary for AI-assist features.
//!
//! The application store talks to this port only; the bundled stub adapter
//! synthesizes templated responses behind fixed delays, and a production
//! implementation plugs a real backend in behind the same interface.

use async_trait::async_trait;

use crate::error::ChatbizError;
use crate::records::{BehaviorAnalysis, ComposeRequest, Conversation, CustomerProfile};
use crate::traits::adapter::ChatbizAdapter;
use crate::types::Tone;

/// Adapter for reply generation, translation, summarization, and profile analysis.
#[async_trait]
pub trait AssistAdapter: ChatbizAdapter {
    /// Translates `content` into `target_language`.
    async fn translate(
        &self,
        content: &str,
        target_language: &str,
    ) -> Result<String, ChatbizError>;

    /// Drafts a suggested agent reply for the conversation.
    async fn draft_reply(&self, conversation: &Conversation) -> Result<String, ChatbizError>;

    /// Produces a short summary of the conversation so far.
    async fn summarize(&self, conversation: &Conversation) -> Result<String, ChatbizError>;

    /// Produces a behavior analysis snapshot for the customer.
    async fn analyze_profile(
        &self,
        profile: &CustomerProfile,
    ) -> Result<BehaviorAnalysis, ChatbizError>;

    /// Composes up to `max_variants` outbound message drafts.
    async fn compose(&self, request: &ComposeRequest) -> Result<Vec<String>, ChatbizError>;

    /// Polishes an agent-written draft with a tone-chosen salutation and closing.
    ///
    /// Blank input returns the empty string unchanged.
    async fn polish(&self, content: &str, tone: Tone) -> Result<String, ChatbizError>;
}
