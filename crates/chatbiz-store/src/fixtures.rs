// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seed data for demo runs and tests: a handful of conversations spread
//! across platforms, recency buckets, and filter dimensions, plus the
//! accounts used to converse on them.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use chatbiz_core::{
    AccountId, AccountStatus, AssistAdapter, Conversation, ConversationId, ConversationStatus,
    CustomerId, CustomerProfile, DeliveryStatus, Message, MessageId, OrderRecord, Platform,
    PlatformAccount, Priority, SenderType, VIP_TAG,
};

use crate::store::AppStore;

impl AppStore {
    /// A store pre-seeded with the bundled demo data. Default accounts are
    /// pre-selected for their platforms.
    pub fn with_fixtures(assist: Arc<dyn AssistAdapter>) -> Self {
        let mut store = AppStore::new(assist);
        store.seed_conversations(conversations());
        store.seed_accounts(accounts());
        store
    }
}

/// The conversation whose seed data carries unread customer messages.
pub fn unread_conversation_id() -> ConversationId {
    ConversationId("conv-wa-1".into())
}

fn message(
    conversation: &str,
    seq: u32,
    sender_type: SenderType,
    sender_id: &str,
    content: &str,
    at: DateTime<Utc>,
) -> Message {
    Message {
        id: MessageId(format!("{conversation}-m{seq}")),
        conversation_id: ConversationId(conversation.into()),
        sender_id: sender_id.into(),
        sender_type,
        content: content.into(),
        original_content: None,
        translated_content: None,
        source_language: None,
        timestamp: at,
        status: match sender_type {
            SenderType::Customer => DeliveryStatus::Unread,
            _ => DeliveryStatus::Delivered,
        },
        attachments: Vec::new(),
        is_ai_generated: false,
    }
}

fn customer(
    id: &str,
    name: &str,
    country: &str,
    language: &str,
    platform: Platform,
    tags: &[&str],
    created: DateTime<Utc>,
) -> CustomerProfile {
    CustomerProfile {
        id: CustomerId(id.into()),
        name: name.into(),
        avatar_url: format!("https://cdn.chatbiz.example/avatars/{id}.png"),
        email: None,
        phone: None,
        country: country.into(),
        language: language.into(),
        platform,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        notes: None,
        order_history: Vec::new(),
        behavior: None,
        created_at: created,
        last_contact_at: None,
    }
}

/// The bundled demo conversations.
pub fn conversations() -> Vec<Conversation> {
    let now = Utc::now();

    // Updated two hours ago: today's bucket, unread, ends on the customer.
    let mut wang_fang = customer(
        "cust-wa-1",
        "王芳",
        "CN",
        "zh-CN",
        Platform::Whatsapp,
        &[VIP_TAG, "老客户"],
        now - Duration::days(200),
    );
    wang_fang.order_history = vec![
        OrderRecord {
            id: "ord-1001".into(),
            description: "真丝连衣裙 x2".into(),
            amount: 598.0,
            placed_at: now - Duration::days(40),
        },
        OrderRecord {
            id: "ord-1042".into(),
            description: "羊绒围巾".into(),
            amount: 329.0,
            placed_at: now - Duration::days(12),
        },
    ];
    let conv_wa = Conversation {
        id: ConversationId("conv-wa-1".into()),
        customer: wang_fang,
        platform: Platform::Whatsapp,
        messages: vec![
            message(
                "conv-wa-1",
                1,
                SenderType::Agent,
                "agent-li",
                "您好，您的订单已安排发货。",
                now - Duration::hours(26),
            ),
            message(
                "conv-wa-1",
                2,
                SenderType::Customer,
                "cust-wa-1",
                "请问大概什么时候能到？",
                now - Duration::hours(3),
            ),
            message(
                "conv-wa-1",
                3,
                SenderType::Customer,
                "cust-wa-1",
                "另外上次那条围巾还有货吗？",
                now - Duration::hours(2),
            ),
        ],
        unread_count: 2,
        status: ConversationStatus::Active,
        priority: Priority::High,
        assigned_to: Some("agent-li".into()),
        tags: vec!["物流".into()],
        is_group: false,
        created_at: now - Duration::days(200),
        updated_at: now - Duration::hours(2),
        ai_summary: None,
        ai_suggestion: None,
    };

    // Updated thirty hours ago: yesterday's bucket, the agent spoke last.
    let conv_tg = Conversation {
        id: ConversationId("conv-tg-1".into()),
        customer: customer(
            "cust-tg-1",
            "Elena Petrova",
            "RU",
            "ru",
            Platform::Telegram,
            &["新客户"],
            now - Duration::days(6),
        ),
        platform: Platform::Telegram,
        messages: vec![
            message(
                "conv-tg-1",
                1,
                SenderType::Customer,
                "cust-tg-1",
                "Есть ли доставка в Москву?",
                now - Duration::hours(31),
            ),
            message(
                "conv-tg-1",
                2,
                SenderType::Agent,
                "agent-zhao",
                "Да, доставка занимает 7-10 дней.",
                now - Duration::hours(30),
            ),
        ],
        unread_count: 0,
        status: ConversationStatus::Active,
        priority: Priority::Medium,
        assigned_to: Some("agent-zhao".into()),
        tags: Vec::new(),
        is_group: false,
        created_at: now - Duration::days(6),
        updated_at: now - Duration::hours(30),
        ai_summary: None,
        ai_suggestion: None,
    };

    // Updated five hours ago: pending and urgent, waiting on an agent.
    let conv_line = Conversation {
        id: ConversationId("conv-line-1".into()),
        customer: customer(
            "cust-line-1",
            "佐藤健",
            "JP",
            "ja",
            Platform::Line,
            &["批发"],
            now - Duration::days(60),
        ),
        platform: Platform::Line,
        messages: vec![message(
            "conv-line-1",
            1,
            SenderType::Customer,
            "cust-line-1",
            "請求書の金額が間違っています。至急確認してください。",
            now - Duration::hours(5),
        )],
        unread_count: 1,
        status: ConversationStatus::Pending,
        priority: Priority::Urgent,
        assigned_to: None,
        tags: vec!["售后".into()],
        is_group: false,
        created_at: now - Duration::days(60),
        updated_at: now - Duration::hours(5),
        ai_summary: None,
        ai_suggestion: None,
    };

    // A group thread, four days old: inside the week bucket only.
    let conv_fb = Conversation {
        id: ConversationId("conv-fb-1".into()),
        customer: customer(
            "cust-fb-1",
            "批发采购群",
            "MY",
            "zh-CN",
            Platform::Messenger,
            &[],
            now - Duration::days(90),
        ),
        platform: Platform::Messenger,
        messages: vec![
            message(
                "conv-fb-1",
                1,
                SenderType::Customer,
                "cust-fb-1",
                "这批货的最小起订量是多少？",
                now - Duration::hours(98),
            ),
            message(
                "conv-fb-1",
                2,
                SenderType::Agent,
                "agent-li",
                "单款 50 件起订，混批 200 件。",
                now - Duration::hours(96),
            ),
        ],
        unread_count: 0,
        status: ConversationStatus::Active,
        priority: Priority::Medium,
        assigned_to: Some("agent-li".into()),
        tags: vec!["批发".into()],
        is_group: true,
        created_at: now - Duration::days(90),
        updated_at: now - Duration::hours(96),
        ai_summary: None,
        ai_suggestion: None,
    };

    // Resolved two weeks ago: only the month bucket still covers it.
    let conv_wx = Conversation {
        id: ConversationId("conv-wx-1".into()),
        customer: customer(
            "cust-wx-1",
            "陈杰",
            "CN",
            "zh-CN",
            Platform::Wechat,
            &["老客户"],
            now - Duration::days(300),
        ),
        platform: Platform::Wechat,
        messages: vec![
            message(
                "conv-wx-1",
                1,
                SenderType::Customer,
                "cust-wx-1",
                "收到了，质量不错。",
                now - Duration::hours(340),
            ),
            message(
                "conv-wx-1",
                2,
                SenderType::Agent,
                "agent-zhao",
                "感谢支持，欢迎再来！",
                now - Duration::hours(339),
            ),
        ],
        unread_count: 0,
        status: ConversationStatus::Resolved,
        priority: Priority::Low,
        assigned_to: Some("agent-zhao".into()),
        tags: Vec::new(),
        is_group: false,
        created_at: now - Duration::days(300),
        updated_at: now - Duration::hours(339),
        ai_summary: None,
        ai_suggestion: None,
    };

    // Closed long ago: outside every recency bucket.
    let conv_ig = Conversation {
        id: ConversationId("conv-ig-1".into()),
        customer: customer(
            "cust-ig-1",
            "Lucy Wong",
            "SG",
            "en",
            Platform::Instagram,
            &[],
            now - Duration::days(120),
        ),
        platform: Platform::Instagram,
        messages: vec![message(
            "conv-ig-1",
            1,
            SenderType::Customer,
            "cust-ig-1",
            "Do you ship to Singapore?",
            now - Duration::hours(800),
        )],
        unread_count: 0,
        status: ConversationStatus::Closed,
        priority: Priority::Low,
        assigned_to: None,
        tags: Vec::new(),
        is_group: false,
        created_at: now - Duration::days(120),
        updated_at: now - Duration::hours(800),
        ai_summary: None,
        ai_suggestion: None,
    };

    vec![conv_wa, conv_tg, conv_line, conv_fb, conv_wx, conv_ig]
}

/// The bundled demo accounts, one default per platform that has any.
pub fn accounts() -> Vec<PlatformAccount> {
    vec![
        PlatformAccount {
            id: AccountId("whatsapp_1755000000001".into()),
            platform: Platform::Whatsapp,
            name: "主号".into(),
            external_id: "+86 138 0000 0001".into(),
            status: AccountStatus::Online,
            is_default: true,
            message_count: 1240,
            ip: Some("203.0.113.10".into()),
            proxy_region: Some("sg".into()),
            proxy_config_id: Some("proxy-sg-1".into()),
            remark: "主力客服号".into(),
        },
        PlatformAccount {
            id: AccountId("whatsapp_1755000000002".into()),
            platform: Platform::Whatsapp,
            name: "备用号".into(),
            external_id: "+86 138 0000 0002".into(),
            status: AccountStatus::Offline,
            is_default: false,
            message_count: 87,
            ip: None,
            proxy_region: None,
            proxy_config_id: None,
            remark: String::new(),
        },
        PlatformAccount {
            id: AccountId("telegram_1755000000003".into()),
            platform: Platform::Telegram,
            name: "ChatBiz 官方".into(),
            external_id: "@chatbiz_support".into(),
            status: AccountStatus::Online,
            is_default: true,
            message_count: 412,
            ip: None,
            proxy_region: None,
            proxy_config_id: None,
            remark: String::new(),
        },
        PlatformAccount {
            id: AccountId("line_1755000000004".into()),
            platform: Platform::Line,
            name: "日本区客服".into(),
            external_id: "@chatbiz_jp".into(),
            status: AccountStatus::Busy,
            is_default: true,
            message_count: 96,
            ip: None,
            proxy_region: Some("jp".into()),
            proxy_config_id: Some("proxy-jp-2".into()),
            remark: "东京代理".into(),
        },
        PlatformAccount {
            id: AccountId("wechat_1755000000005".into()),
            platform: Platform::Wechat,
            name: "微信客服".into(),
            external_id: "chatbiz-wx".into(),
            status: AccountStatus::NotLoggedIn,
            is_default: true,
            message_count: 3051,
            ip: None,
            proxy_region: None,
            proxy_config_id: None,
            remark: String::new(),
        },
    ]
}
