// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assist-backed commands: reply drafting, summarization, translation,
//! composition, and polishing, all through the configured assist port.

use chrono::Utc;
use clap::Args;
use uuid::Uuid;

use chatbiz_config::ChatbizConfig;
use chatbiz_core::{
    AssistAdapter, ChatbizError, ComposeRequest, ConversationId, DeliveryStatus, Message,
    MessageId, SenderType, Tone,
};

use crate::{assist_from_config, demo_store, parse_value};

fn unknown_conversation(id: &str) -> ChatbizError {
    ChatbizError::Internal(format!("no such conversation: {id}"))
}

/// Run the `chatbiz reply` command: draft an AI reply and append it.
pub async fn run_reply(config: &ChatbizConfig, conversation: &str) -> Result<(), ChatbizError> {
    let mut store = demo_store(config);
    let id = ConversationId(conversation.to_string());

    let reply = store
        .generate_ai_reply(&id)
        .await?
        .ok_or_else(|| unknown_conversation(conversation))?;

    store.add_message(
        &id,
        Message {
            id: MessageId(Uuid::new_v4().to_string()),
            conversation_id: id.clone(),
            sender_id: config.agent.name.clone(),
            sender_type: SenderType::Ai,
            content: reply.clone(),
            original_content: None,
            translated_content: None,
            source_language: None,
            timestamp: Utc::now(),
            status: DeliveryStatus::Sent,
            attachments: Vec::new(),
            is_ai_generated: true,
        },
    );

    println!("{reply}");
    Ok(())
}

/// Run the `chatbiz summarize` command.
pub async fn run_summarize(
    config: &ChatbizConfig,
    conversation: &str,
) -> Result<(), ChatbizError> {
    let mut store = demo_store(config);
    let id = ConversationId(conversation.to_string());
    let summary = store
        .generate_summary(&id)
        .await?
        .ok_or_else(|| unknown_conversation(conversation))?;
    println!("{summary}");
    Ok(())
}

/// Run the `chatbiz translate` command.
pub async fn run_translate(
    config: &ChatbizConfig,
    conversation: &str,
    message: &str,
    language: &str,
) -> Result<(), ChatbizError> {
    let mut store = demo_store(config);
    let id = ConversationId(conversation.to_string());
    let message_id = MessageId(message.to_string());
    let translated = store
        .translate_message(&id, &message_id, language)
        .await?
        .ok_or_else(|| {
            ChatbizError::Internal(format!("no such message: {conversation}/{message}"))
        })?;
    println!("{translated}");
    Ok(())
}

/// Flags for the `chatbiz compose` command.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// What the message should be about.
    prompt: String,

    /// Knowledge-base excerpt to embed verbatim (repeatable).
    #[arg(long = "knowledge")]
    knowledge_texts: Vec<String>,

    /// friendly, professional, or casual.
    #[arg(long, default_value = "friendly")]
    tone: String,

    /// How many drafts to produce.
    #[arg(long, default_value_t = 3)]
    variants: usize,
}

/// Run the `chatbiz compose` command.
pub async fn run_compose(config: &ChatbizConfig, args: ComposeArgs) -> Result<(), ChatbizError> {
    let assist = assist_from_config(config);
    let tone: Tone = parse_value("tone", &args.tone)?;
    let variants = assist
        .compose(&ComposeRequest {
            prompt: args.prompt,
            knowledge_texts: args.knowledge_texts,
            tone,
            max_variants: args.variants,
        })
        .await?;
    for (i, variant) in variants.iter().enumerate() {
        println!("--- draft {} ---", i + 1);
        println!("{variant}");
    }
    Ok(())
}

/// Run the `chatbiz polish` command.
pub async fn run_polish(
    config: &ChatbizConfig,
    content: &str,
    tone: &str,
) -> Result<(), ChatbizError> {
    let assist = assist_from_config(config);
    let tone: Tone = parse_value("tone", tone)?;
    let polished = assist.polish(content, tone).await?;
    println!("{polished}");
    Ok(())
}
