// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The application store: single owner of all client-side state.
//!
//! Every mutation goes through a named method here; reads are plain accessors
//! or the derived [`AppStore::filtered_conversations`] view. Assist and
//! scheduler work is delegated to injected adapter ports, with per-feature
//! busy flags maintained across the await.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use chatbiz_core::{
    AccountId, AccountStatus, AssistAdapter, BehaviorAnalysis, ChatbizError, Conversation,
    ConversationId, LocalStore, Message, MessageId, Platform, PlatformAccount, PlatformScope,
    Snapshot, UserSettings,
};

use crate::filter::{FilterCriteria, FilterUpdate};

/// Busy flags for in-flight assist operations, one per feature.
///
/// A flag is raised before the port call and lowered when it resolves,
/// whether it succeeded or failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssistActivity {
    pub translating: bool,
    pub drafting_reply: bool,
    pub summarizing: bool,
    pub analyzing: bool,
}

/// Fields accepted when registering a new platform account.
///
/// The id is synthesized by the store; `message_count` starts at zero.
#[derive(Debug, Clone)]
pub struct NewPlatformAccount {
    pub platform: Platform,
    pub name: String,
    pub external_id: String,
    pub status: AccountStatus,
    pub is_default: bool,
    pub ip: Option<String>,
    pub proxy_region: Option<String>,
    pub proxy_config_id: Option<String>,
    pub remark: String,
}

/// Partial update for an existing platform account; `None` leaves the field.
#[derive(Debug, Clone, Default)]
pub struct PlatformAccountUpdate {
    pub name: Option<String>,
    pub status: Option<AccountStatus>,
    pub is_default: Option<bool>,
    pub remark: Option<String>,
}

/// The client-side state store.
pub struct AppStore {
    conversations: Vec<Conversation>,
    accounts: Vec<PlatformAccount>,
    selected_platform: PlatformScope,
    selected_accounts: HashMap<Platform, AccountId>,
    selected_conversation: Option<ConversationId>,
    criteria: FilterCriteria,
    search_query: String,
    activity: AssistActivity,
    user_settings: UserSettings,
    sidebar_collapsed: bool,
    current_language: String,
    assist: Arc<dyn AssistAdapter>,
    local: Option<Arc<dyn LocalStore>>,
}

impl AppStore {
    /// Creates an empty store wired to the given assist port.
    pub fn new(assist: Arc<dyn AssistAdapter>) -> Self {
        Self {
            conversations: Vec::new(),
            accounts: Vec::new(),
            selected_platform: PlatformScope::All,
            selected_accounts: HashMap::new(),
            selected_conversation: None,
            criteria: FilterCriteria::default(),
            search_query: String::new(),
            activity: AssistActivity::default(),
            user_settings: UserSettings::default(),
            sidebar_collapsed: false,
            current_language: "zh-CN".to_string(),
            assist,
            local: None,
        }
    }

    /// Attaches a local snapshot store for settings persistence.
    pub fn with_local(mut self, local: Arc<dyn LocalStore>) -> Self {
        self.local = Some(local);
        self
    }

    // ---- read accessors ----

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| &c.id == id)
    }

    pub fn selected_platform(&self) -> PlatformScope {
        self.selected_platform
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.selected_conversation
            .as_ref()
            .and_then(|id| self.conversation(id))
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn activity(&self) -> AssistActivity {
        self.activity
    }

    pub fn user_settings(&self) -> &UserSettings {
        &self.user_settings
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    /// The conversation list view: every conversation passing the active
    /// criteria, platform scope, and search query, newest update first.
    ///
    /// The sort is stable, so equal timestamps keep insertion order.
    pub fn filtered_conversations(&self) -> Vec<&Conversation> {
        let now = Utc::now();
        let mut matched: Vec<&Conversation> = self
            .conversations
            .iter()
            .filter(|c| {
                self.criteria
                    .matches(c, self.selected_platform, &self.search_query, now)
            })
            .collect();
        matched.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        matched
    }

    // ---- platform and account selection ----

    pub fn set_selected_platform(&mut self, scope: PlatformScope) {
        self.selected_platform = scope;
    }

    /// Selects the active account for a platform. The id is not validated
    /// against the account list; a dangling selection simply resolves to
    /// `None` on read.
    pub fn set_platform_account(&mut self, platform: Platform, account: AccountId) {
        self.selected_accounts.insert(platform, account);
    }

    pub fn platform_accounts(&self, platform: Platform) -> Vec<&PlatformAccount> {
        self.accounts.iter().filter(|a| a.platform == platform).collect()
    }

    /// The explicitly selected account for a platform, falling back to the
    /// platform's default account when nothing was selected.
    pub fn selected_account(&self, platform: Platform) -> Option<&PlatformAccount> {
        if let Some(id) = self.selected_accounts.get(&platform)
            && let Some(account) = self.accounts.iter().find(|a| &a.id == id)
        {
            return Some(account);
        }
        self.accounts.iter().find(|a| a.platform == platform && a.is_default)
    }

    /// Registers a new account, synthesizing its id from the platform name
    /// and the current epoch milliseconds.
    pub fn add_platform_account(&mut self, new: NewPlatformAccount) -> AccountId {
        let id = AccountId(format!("{}_{}", new.platform, Utc::now().timestamp_millis()));
        debug!(account = %id.0, "registering platform account");
        self.accounts.push(PlatformAccount {
            id: id.clone(),
            platform: new.platform,
            name: new.name,
            external_id: new.external_id,
            status: new.status,
            is_default: new.is_default,
            message_count: 0,
            ip: new.ip,
            proxy_region: new.proxy_region,
            proxy_config_id: new.proxy_config_id,
            remark: new.remark,
        });
        id
    }

    /// Applies a partial update to an account. An unknown id is a no-op.
    pub fn update_platform_account(&mut self, id: &AccountId, update: PlatformAccountUpdate) {
        let Some(account) = self.accounts.iter_mut().find(|a| &a.id == id) else {
            return;
        };
        if let Some(name) = update.name {
            account.name = name;
        }
        if let Some(status) = update.status {
            account.status = status;
        }
        if let Some(is_default) = update.is_default {
            account.is_default = is_default;
        }
        if let Some(remark) = update.remark {
            account.remark = remark;
        }
    }

    /// Removes an account. An unknown id is a no-op.
    pub fn delete_platform_account(&mut self, id: &AccountId) {
        self.accounts.retain(|a| &a.id != id);
    }

    // ---- conversation mutators ----

    pub fn set_selected_conversation(&mut self, id: Option<ConversationId>) {
        self.selected_conversation = id;
    }

    /// Appends a message to a conversation and bumps its `updated_at`.
    ///
    /// This is the only append path, which keeps the derived last-message
    /// view and the recency ordering consistent.
    pub fn add_message(&mut self, conversation_id: &ConversationId, message: Message) {
        let Some(convo) = self.conversations.iter_mut().find(|c| &c.id == conversation_id)
        else {
            return;
        };
        convo.messages.push(message);
        convo.updated_at = Utc::now();
    }

    /// Clears the unread counter. No other field is touched, so marking a
    /// conversation as read never reorders the list.
    pub fn mark_as_read(&mut self, conversation_id: &ConversationId) {
        if let Some(convo) = self.conversations.iter_mut().find(|c| &c.id == conversation_id) {
            convo.unread_count = 0;
        }
    }

    // ---- filtering ----

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_filter_criteria(&mut self, update: FilterUpdate) {
        self.criteria.merge(update);
    }

    /// Resets criteria to the default, clears the search query, and widens
    /// the platform scope back to all channels.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.search_query.clear();
        self.selected_platform = PlatformScope::All;
    }

    // ---- assist delegation ----

    /// Translates one message and records the result on it.
    ///
    /// Returns `Ok(None)` without calling the port when either id is unknown.
    pub async fn translate_message(
        &mut self,
        conversation_id: &ConversationId,
        message_id: &MessageId,
        target_language: &str,
    ) -> Result<Option<String>, ChatbizError> {
        let Some(content) = self
            .conversation(conversation_id)
            .and_then(|c| c.messages.iter().find(|m| &m.id == message_id))
            .map(|m| m.content.clone())
        else {
            return Ok(None);
        };

        self.activity.translating = true;
        let result = self.assist.translate(&content, target_language).await;
        self.activity.translating = false;
        let translated = result?;

        if let Some(message) = self
            .conversations
            .iter_mut()
            .find(|c| &c.id == conversation_id)
            .and_then(|c| c.messages.iter_mut().find(|m| &m.id == message_id))
        {
            message.translated_content = Some(translated.clone());
        }
        Ok(Some(translated))
    }

    /// Drafts a suggested reply and records it as the conversation's
    /// `ai_suggestion`.
    pub async fn generate_ai_reply(
        &mut self,
        conversation_id: &ConversationId,
    ) -> Result<Option<String>, ChatbizError> {
        let Some(snapshot) = self.conversation(conversation_id).cloned() else {
            return Ok(None);
        };

        self.activity.drafting_reply = true;
        let result = self.assist.draft_reply(&snapshot).await;
        self.activity.drafting_reply = false;
        let reply = result?;

        if let Some(convo) = self.conversations.iter_mut().find(|c| &c.id == conversation_id) {
            convo.ai_suggestion = Some(reply.clone());
        }
        Ok(Some(reply))
    }

    /// Summarizes the conversation and records it as `ai_summary`.
    pub async fn generate_summary(
        &mut self,
        conversation_id: &ConversationId,
    ) -> Result<Option<String>, ChatbizError> {
        let Some(snapshot) = self.conversation(conversation_id).cloned() else {
            return Ok(None);
        };

        self.activity.summarizing = true;
        let result = self.assist.summarize(&snapshot).await;
        self.activity.summarizing = false;
        let summary = result?;

        if let Some(convo) = self.conversations.iter_mut().find(|c| &c.id == conversation_id) {
            convo.ai_summary = Some(summary.clone());
        }
        Ok(Some(summary))
    }

    /// Runs behavior analysis on the conversation's customer and records it
    /// on the embedded profile.
    pub async fn analyze_customer(
        &mut self,
        conversation_id: &ConversationId,
    ) -> Result<Option<BehaviorAnalysis>, ChatbizError> {
        let Some(profile) = self.conversation(conversation_id).map(|c| c.customer.clone())
        else {
            return Ok(None);
        };

        self.activity.analyzing = true;
        let result = self.assist.analyze_profile(&profile).await;
        self.activity.analyzing = false;
        let analysis = result?;

        if let Some(convo) = self.conversations.iter_mut().find(|c| &c.id == conversation_id) {
            convo.customer.behavior = Some(analysis.clone());
        }
        Ok(Some(analysis))
    }

    // ---- persisted settings ----

    pub async fn set_user_settings(&mut self, settings: UserSettings) {
        self.user_settings = settings;
        self.persist_snapshot().await;
    }

    pub async fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
        self.persist_snapshot().await;
    }

    pub async fn set_language(&mut self, language: impl Into<String>) {
        self.current_language = language.into();
        self.persist_snapshot().await;
    }

    /// Loads the persisted snapshot, if any, into the store. Load failures
    /// are logged and leave the defaults in place.
    pub async fn restore_snapshot(&mut self) {
        let Some(local) = &self.local else {
            return;
        };
        match local.load_snapshot().await {
            Ok(Some(snapshot)) => {
                self.user_settings = snapshot.user_settings;
                self.sidebar_collapsed = snapshot.sidebar_collapsed;
                self.current_language = snapshot.current_language;
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "failed to restore local snapshot"),
        }
    }

    /// Writes the current snapshot fields out, fire-and-forget: a write
    /// failure is logged and the in-memory state stands.
    async fn persist_snapshot(&self) {
        let Some(local) = &self.local else {
            return;
        };
        let snapshot = Snapshot {
            user_settings: self.user_settings.clone(),
            sidebar_collapsed: self.sidebar_collapsed,
            current_language: self.current_language.clone(),
        };
        if let Err(err) = local.save_snapshot(&snapshot).await {
            warn!(error = %err, "failed to persist local snapshot");
        }
    }

    // Fixture seeding hooks, used by `with_fixtures` and tests.
    pub(crate) fn seed_conversations(&mut self, conversations: Vec<Conversation>) {
        self.conversations = conversations;
    }

    pub(crate) fn seed_accounts(&mut self, accounts: Vec<PlatformAccount>) {
        self.accounts = accounts;
        self.selected_accounts = self
            .accounts
            .iter()
            .filter(|a| a.is_default)
            .map(|a| (a.platform, a.id.clone()))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chatbiz_assist::StubAssist;
    use chatbiz_core::{ConversationStatus, DeliveryStatus, SenderType};
    use chatbiz_storage::MemoryLocalStore;

    fn store() -> AppStore {
        let mut store = AppStore::new(Arc::new(StubAssist::immediate()));
        store.seed_conversations(fixtures::conversations());
        store.seed_accounts(fixtures::accounts());
        store
    }

    fn first_id(store: &AppStore) -> ConversationId {
        store.conversations()[0].id.clone()
    }

    fn new_message(convo: &ConversationId, content: &str, sender: SenderType) -> Message {
        Message {
            id: MessageId("m-new".into()),
            conversation_id: convo.clone(),
            sender_id: "s".into(),
            sender_type: sender,
            content: content.into(),
            original_content: None,
            translated_content: None,
            source_language: None,
            timestamp: Utc::now(),
            status: DeliveryStatus::Sent,
            attachments: Vec::new(),
            is_ai_generated: false,
        }
    }

    #[test]
    fn add_message_appends_and_bumps_updated_at() {
        let mut store = store();
        let id = first_id(&store);
        let before = store.conversation(&id).unwrap().clone();

        store.add_message(&id, new_message(&id, "好的，稍等", SenderType::Agent));

        let after = store.conversation(&id).unwrap();
        assert_eq!(after.messages.len(), before.messages.len() + 1);
        assert_eq!(after.last_message().unwrap().content, "好的，稍等");
        assert!(after.updated_at > before.updated_at);
        // Unread count is not part of the append path.
        assert_eq!(after.unread_count, before.unread_count);
    }

    #[test]
    fn add_message_with_unknown_id_is_a_no_op() {
        let mut store = store();
        let ghost = ConversationId("no-such".into());
        let total: usize = store.conversations().iter().map(|c| c.messages.len()).sum();
        store.add_message(&ghost, new_message(&ghost, "hello", SenderType::Agent));
        let after: usize = store.conversations().iter().map(|c| c.messages.len()).sum();
        assert_eq!(total, after);
    }

    #[test]
    fn mark_as_read_only_clears_the_counter() {
        let mut store = store();
        let id = fixtures::unread_conversation_id();
        let before = store.conversation(&id).unwrap().clone();
        assert!(before.unread_count > 0);

        store.mark_as_read(&id);
        store.mark_as_read(&id); // idempotent

        let after = store.conversation(&id).unwrap();
        assert_eq!(after.unread_count, 0);
        assert_eq!(after.updated_at, before.updated_at);
        assert_eq!(after.messages, before.messages);
    }

    #[test]
    fn added_account_round_trips_modulo_the_synthesized_id() {
        let mut store = store();
        let id = store.add_platform_account(NewPlatformAccount {
            platform: Platform::Telegram,
            name: "备用号".into(),
            external_id: "@chatbiz_backup".into(),
            status: AccountStatus::Online,
            is_default: false,
            ip: Some("198.51.100.7".into()),
            proxy_region: Some("de".into()),
            proxy_config_id: Some("proxy-de-3".into()),
            remark: "夜班".into(),
        });
        assert!(id.0.starts_with("telegram_"));

        let added = store
            .platform_accounts(Platform::Telegram)
            .into_iter()
            .find(|a| a.id == id)
            .unwrap();
        assert_eq!(added.platform, Platform::Telegram);
        assert_eq!(added.name, "备用号");
        assert_eq!(added.external_id, "@chatbiz_backup");
        assert_eq!(added.status, AccountStatus::Online);
        assert!(!added.is_default);
        assert_eq!(added.message_count, 0);
        assert_eq!(added.ip.as_deref(), Some("198.51.100.7"));
        assert_eq!(added.proxy_region.as_deref(), Some("de"));
        assert_eq!(added.proxy_config_id.as_deref(), Some("proxy-de-3"));
        assert_eq!(added.remark, "夜班");
    }

    #[test]
    fn account_update_and_delete_tolerate_unknown_ids() {
        let mut store = store();
        let count = store.platform_accounts(Platform::Whatsapp).len();
        let ghost = AccountId("whatsapp_0".into());
        store.update_platform_account(
            &ghost,
            PlatformAccountUpdate { name: Some("x".into()), ..PlatformAccountUpdate::default() },
        );
        store.delete_platform_account(&ghost);
        assert_eq!(store.platform_accounts(Platform::Whatsapp).len(), count);
    }

    #[test]
    fn account_update_applies_only_provided_fields() {
        let mut store = store();
        let id = store.platform_accounts(Platform::Whatsapp)[0].id.clone();
        store.update_platform_account(
            &id,
            PlatformAccountUpdate {
                status: Some(AccountStatus::Busy),
                ..PlatformAccountUpdate::default()
            },
        );
        let account = store
            .platform_accounts(Platform::Whatsapp)
            .into_iter()
            .find(|a| a.id == id)
            .unwrap();
        assert_eq!(account.status, AccountStatus::Busy);
    }

    #[test]
    fn selected_conversation_resolves_through_the_pointer() {
        let mut store = store();
        assert!(store.selected_conversation().is_none());

        let id = first_id(&store);
        store.set_selected_conversation(Some(id.clone()));
        assert_eq!(store.selected_conversation().unwrap().id, id);

        // A dangling pointer resolves to nothing rather than erroring.
        store.set_selected_conversation(Some(ConversationId("gone".into())));
        assert!(store.selected_conversation().is_none());
    }

    #[test]
    fn selected_account_falls_back_to_the_default() {
        let store = store();
        let account = store.selected_account(Platform::Whatsapp).unwrap();
        assert!(account.is_default);
    }

    #[test]
    fn filtered_conversations_sort_newest_first() {
        let store = store();
        let list = store.filtered_conversations();
        assert!(!list.is_empty());
        for pair in list.windows(2) {
            assert!(pair[0].updated_at >= pair[1].updated_at);
        }
    }

    #[test]
    fn filtered_view_is_idempotent_and_order_stable_on_ties() {
        let mut store = store();

        // Give two conversations the same updated_at: the stable sort must
        // keep their insertion order, and repeated reads must agree.
        let mut convos = fixtures::conversations();
        let tied = convos[0].updated_at;
        convos[1].updated_at = tied;
        let first_tied = convos[0].id.clone();
        let second_tied = convos[1].id.clone();
        store.seed_conversations(convos);

        let first: Vec<ConversationId> =
            store.filtered_conversations().iter().map(|c| c.id.clone()).collect();
        let second: Vec<ConversationId> =
            store.filtered_conversations().iter().map(|c| c.id.clone()).collect();
        assert_eq!(first, second);

        let tied_positions: Vec<&ConversationId> = first
            .iter()
            .filter(|id| **id == first_tied || **id == second_tied)
            .collect();
        assert_eq!(tied_positions, vec![&first_tied, &second_tied]);
    }

    #[test]
    fn scope_criteria_and_search_compose() {
        let mut store = store();
        let all = store.filtered_conversations().len();
        assert!(all > 1);

        store.set_selected_platform(PlatformScope::Only(Platform::Whatsapp));
        store.set_filter_criteria(FilterUpdate {
            unread_only: Some(true),
            ..FilterUpdate::default()
        });
        let narrowed = store.filtered_conversations();
        assert!(narrowed.len() < all);
        assert!(narrowed
            .iter()
            .all(|c| c.platform == Platform::Whatsapp && c.unread_count > 0));

        store.set_search_query("不存在的词语zzz");
        assert!(store.filtered_conversations().is_empty());
    }

    #[test]
    fn marking_as_read_drops_a_conversation_from_the_unread_view() {
        let mut store = store();
        let id = fixtures::unread_conversation_id();
        store.set_filter_criteria(FilterUpdate {
            unread_only: Some(true),
            ..FilterUpdate::default()
        });
        assert!(store.filtered_conversations().iter().any(|c| c.id == id));

        store.mark_as_read(&id);
        assert!(!store.filtered_conversations().iter().any(|c| c.id == id));
    }

    #[test]
    fn clear_filters_restores_the_initial_view() {
        let mut store = store();
        store.set_selected_platform(PlatformScope::Only(Platform::Line));
        store.set_search_query("发货");
        store.set_filter_criteria(FilterUpdate {
            statuses: Some(vec![ConversationStatus::Closed]),
            unreplied_only: Some(true),
            ..FilterUpdate::default()
        });

        store.clear_filters();

        assert_eq!(*store.criteria(), FilterCriteria::default());
        assert_eq!(store.search_query(), "");
        assert_eq!(store.selected_platform(), PlatformScope::All);
    }

    #[tokio::test(start_paused = true)]
    async fn translate_records_result_and_settles_the_flag() {
        let mut store = store();
        let id = first_id(&store);
        let message_id = store.conversation(&id).unwrap().messages[0].id.clone();

        let translated =
            store.translate_message(&id, &message_id, "en").await.unwrap().unwrap();
        assert!(translated.starts_with("[en] "));
        assert!(!store.activity().translating);

        let message = store
            .conversation(&id)
            .unwrap()
            .messages
            .iter()
            .find(|m| m.id == message_id)
            .unwrap();
        assert_eq!(message.translated_content.as_deref(), Some(translated.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn assist_calls_with_unknown_ids_return_none() {
        let mut store = store();
        let ghost = ConversationId("no-such".into());
        assert!(store.generate_ai_reply(&ghost).await.unwrap().is_none());
        assert!(store.generate_summary(&ghost).await.unwrap().is_none());
        assert!(store.analyze_customer(&ghost).await.unwrap().is_none());
        assert_eq!(store.activity(), AssistActivity::default());
    }

    #[tokio::test(start_paused = true)]
    async fn assist_results_land_on_the_conversation() {
        let mut store = store();
        let id = first_id(&store);

        let reply = store.generate_ai_reply(&id).await.unwrap().unwrap();
        let summary = store.generate_summary(&id).await.unwrap().unwrap();
        let analysis = store.analyze_customer(&id).await.unwrap().unwrap();

        let convo = store.conversation(&id).unwrap();
        assert_eq!(convo.ai_suggestion.as_deref(), Some(reply.as_str()));
        assert_eq!(convo.ai_summary.as_deref(), Some(summary.as_str()));
        assert_eq!(convo.customer.behavior.as_ref(), Some(&analysis));
        assert_eq!(store.activity(), AssistActivity::default());
    }

    #[tokio::test(start_paused = true)]
    async fn settings_round_trip_through_the_local_store() {
        let local = Arc::new(MemoryLocalStore::new());

        let mut store =
            AppStore::new(Arc::new(StubAssist::immediate())).with_local(local.clone());
        store.set_sidebar_collapsed(true).await;
        store.set_language("en-US").await;
        let mut settings = UserSettings::default();
        settings.display_name = "李娜".into();
        store.set_user_settings(settings).await;

        let mut fresh =
            AppStore::new(Arc::new(StubAssist::immediate())).with_local(local);
        fresh.restore_snapshot().await;
        assert!(fresh.sidebar_collapsed());
        assert_eq!(fresh.current_language(), "en-US");
        assert_eq!(fresh.user_settings().display_name, "李娜");
    }

    #[tokio::test(start_paused = true)]
    async fn settings_changes_without_a_local_store_still_apply() {
        let mut store = AppStore::new(Arc::new(StubAssist::immediate()));
        store.set_sidebar_collapsed(true).await;
        assert!(store.sidebar_collapsed());
    }
}
