// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application state store and conversation filter engine for ChatBiz.
//!
//! [`AppStore`] is the single owner of client-side state: the conversation
//! list, platform accounts, selections, filter criteria, and persisted
//! settings. [`FilterCriteria`] is the pure composite predicate behind the
//! filtered conversation view; it holds no store state and can be evaluated
//! against any conversation.

pub mod filter;
pub mod fixtures;
pub mod store;

pub use filter::{FilterCriteria, FilterUpdate};
pub use store::{AppStore, AssistActivity, NewPlatformAccount, PlatformAccountUpdate};
