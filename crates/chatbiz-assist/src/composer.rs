// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure message composition templates.
//!
//! These functions synthesize the actual draft text; the async delay and
//! port plumbing live in [`crate::stub::StubAssist`].

use chatbiz_core::{ComposeRequest, Tone};

/// Fixed call-to-action appended after embedded knowledge text.
const KNOWLEDGE_CTA: &str = "如需了解更多详情，欢迎随时咨询！";

/// Composes `max_variants` outbound drafts.
///
/// With knowledge texts present, every variant embeds the joined knowledge
/// verbatim followed by the fixed call-to-action; variants differ only by a
/// numbered `（备选 N）` suffix. Without knowledge, the base text branches
/// on tone. The first variant is always unsuffixed.
pub fn compose_variants(request: &ComposeRequest) -> Vec<String> {
    let base = if request.knowledge_texts.is_empty() {
        tone_template(&request.prompt, request.tone)
    } else {
        format!("{}\n\n{KNOWLEDGE_CTA}", request.knowledge_texts.join("\n"))
    };

    (0..request.max_variants)
        .map(|i| {
            if i == 0 {
                base.clone()
            } else {
                format!("{base}（备选 {i}）")
            }
        })
        .collect()
}

fn tone_template(prompt: &str, tone: Tone) -> String {
    match tone {
        Tone::Friendly => {
            format!("您好呀！关于「{prompt}」，我们很乐意为您效劳，有任何问题随时找我哦～")
        }
        Tone::Professional => {
            format!("您好，关于「{prompt}」，我们已为您整理了相关信息，如需进一步协助请告知。")
        }
        _ => format!("Hi！关于「{prompt}」，随时联系我们了解更多。"),
    }
}

/// Polishes an agent-written draft: trims it and wraps it with a
/// tone-chosen salutation and closing. Blank input short-circuits to `""`.
pub fn polish_content(content: &str, tone: Tone) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match tone {
        Tone::Friendly => format!("您好呀！{trimmed}\n\n祝您生活愉快～"),
        Tone::Professional => format!("尊敬的客户，您好。{trimmed}\n\n此致，敬礼。"),
        _ => format!("Hi！{trimmed}\n\n再聊！"),
    }
}
