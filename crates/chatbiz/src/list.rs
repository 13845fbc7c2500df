// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `chatbiz list` command implementation.
//!
//! Maps CLI flags onto the filter criteria and prints the filtered
//! conversation view, newest update first.

use clap::Args;

use chatbiz_config::ChatbizConfig;
use chatbiz_core::{ChatScope, ChatbizError, PlatformScope, TriState};
use chatbiz_store::FilterUpdate;

use crate::{demo_store, parse_value};

/// Flags for the `chatbiz list` command, one per filter dimension.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Restrict to one platform (whatsapp, telegram, line, messenger,
    /// instagram, wechat).
    #[arg(long)]
    platform: Option<String>,

    /// Conversation statuses to include (repeatable). Defaults to
    /// active and pending.
    #[arg(long = "status")]
    statuses: Vec<String>,

    /// Include every status, overriding the active/pending default.
    #[arg(long)]
    all_statuses: bool,

    /// Priorities to include (repeatable).
    #[arg(long = "priority")]
    priorities: Vec<String>,

    /// Conversation tags; any listed tag matches (repeatable).
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Only conversations with unread messages.
    #[arg(long)]
    unread: bool,

    /// Only conversations where the customer spoke last.
    #[arg(long)]
    unreplied: bool,

    /// Only group threads.
    #[arg(long, conflicts_with = "single")]
    group: bool,

    /// Only one-to-one threads.
    #[arg(long)]
    single: bool,

    /// Customer countries to include (repeatable).
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Customer language codes to include (repeatable).
    #[arg(long = "language")]
    languages: Vec<String>,

    /// Assigned agents to include (repeatable).
    #[arg(long = "assignee")]
    assignees: Vec<String>,

    /// Only customers with recorded orders.
    #[arg(long, conflicts_with = "no_order")]
    has_order: bool,

    /// Only customers without recorded orders.
    #[arg(long)]
    no_order: bool,

    /// Only VIP customers.
    #[arg(long, conflicts_with = "no_vip")]
    vip: bool,

    /// Only non-VIP customers.
    #[arg(long)]
    no_vip: bool,

    /// Customer tags; any listed tag matches (repeatable).
    #[arg(long = "customer-tag")]
    customer_tags: Vec<String>,

    /// Inclusive lower bound on message count.
    #[arg(long)]
    min_messages: Option<usize>,

    /// Inclusive upper bound on message count.
    #[arg(long)]
    max_messages: Option<usize>,

    /// Recency bucket since last update (today, yesterday, week, month).
    #[arg(long)]
    recency: Option<String>,

    /// Case-insensitive search over customer names and message contents.
    #[arg(long, default_value = "")]
    search: String,
}

fn tri_state(require: bool, forbid: bool) -> TriState {
    match (require, forbid) {
        (true, _) => TriState::RequireTrue,
        (_, true) => TriState::RequireFalse,
        _ => TriState::Unconstrained,
    }
}

/// Run the `chatbiz list` command.
pub fn run_list(config: &ChatbizConfig, args: ListArgs) -> Result<(), ChatbizError> {
    let mut store = demo_store(config);

    if let Some(platform) = &args.platform {
        store.set_selected_platform(PlatformScope::Only(parse_value("platform", platform)?));
    }

    let statuses = if args.all_statuses {
        Some(Vec::new())
    } else if args.statuses.is_empty() {
        None
    } else {
        Some(
            args.statuses
                .iter()
                .map(|s| parse_value("status", s))
                .collect::<Result<_, _>>()?,
        )
    };
    let priorities = args
        .priorities
        .iter()
        .map(|p| parse_value("priority", p))
        .collect::<Result<Vec<_>, _>>()?;
    let recency = match &args.recency {
        Some(bucket) => Some(Some(parse_value("recency bucket", bucket)?)),
        None => None,
    };
    let chat_scope = match (args.group, args.single) {
        (true, _) => Some(ChatScope::Group),
        (_, true) => Some(ChatScope::Single),
        _ => None,
    };

    store.set_filter_criteria(FilterUpdate {
        statuses,
        priorities: (!priorities.is_empty()).then_some(priorities),
        tags: (!args.tags.is_empty()).then_some(args.tags),
        unread_only: args.unread.then_some(true),
        unreplied_only: args.unreplied.then_some(true),
        chat_scope,
        countries: (!args.countries.is_empty()).then_some(args.countries),
        languages: (!args.languages.is_empty()).then_some(args.languages),
        assignees: (!args.assignees.is_empty()).then_some(args.assignees),
        has_order: Some(tri_state(args.has_order, args.no_order)),
        is_vip: Some(tri_state(args.vip, args.no_vip)),
        customer_tags: (!args.customer_tags.is_empty()).then_some(args.customer_tags),
        min_messages: args.min_messages.map(Some),
        max_messages: args.max_messages.map(Some),
        recency,
    });
    store.set_search_query(args.search);

    let matched = store.filtered_conversations();
    println!("{} conversation(s)", matched.len());
    for convo in matched {
        let preview: String = convo
            .last_message()
            .map(|m| m.content.chars().take(32).collect())
            .unwrap_or_default();
        println!(
            "{}  {:<9} {:<12} {:<8} {:<6} unread:{:<3} {}",
            convo.updated_at.format("%Y-%m-%d %H:%M"),
            convo.platform,
            convo.customer.name,
            convo.status,
            convo.priority,
            convo.unread_count,
            preview,
        );
    }
    Ok(())
}
