// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the ChatBiz conversation workbench.
//!
//! This crate provides the foundational trait definitions, error types,
//! domain records, and common enumerations used throughout the ChatBiz
//! workspace. The application store and all adapter implementations build
//! on the definitions here.

pub mod error;
pub mod records;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ChatbizError;
pub use records::{
    ActivationRecord, BehaviorAnalysis, ComposeRequest, Conversation, CustomerProfile, Message,
    OrderRecord, PlatformAccount, SendTimeSuggestion, Snapshot, UserSettings, VIP_TAG,
};
pub use types::{
    AccountId, AccountStatus, AdapterType, ChatScope, ConversationId, ConversationStatus,
    CustomerId, DayPart, DeliveryStatus, HealthStatus, MessageId, Platform, PlatformScope,
    Priority, RecencyBucket, SenderType, SendWindow, Tone, TriState,
};

// Re-export all adapter traits at crate root.
pub use traits::{AssistAdapter, ChatbizAdapter, LocalStore, SchedulerAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chatbiz_error_has_all_variants() {
        let _config = ChatbizError::Config("test".into());
        let _snapshot = ChatbizError::Snapshot {
            source: Box::new(std::io::Error::other("test")),
        };
        let _assist = ChatbizError::Assist {
            message: "test".into(),
            source: None,
        };
        let _internal = ChatbizError::Internal("test".into());
    }

    #[test]
    fn adapter_type_round_trips() {
        use std::str::FromStr;

        let variants = [AdapterType::Assist, AdapterType::Scheduler, AdapterType::Snapshot];
        for variant in &variants {
            let s = variant.to_string();
            let parsed = AdapterType::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // Verifies that all adapter traits compile and are accessible
        // through the public API.
        fn _assert_base<T: ChatbizAdapter>() {}
        fn _assert_assist<T: AssistAdapter>() {}
        fn _assert_scheduler<T: SchedulerAdapter>() {}
        fn _assert_local_store<T: LocalStore>() {}
    }
}
