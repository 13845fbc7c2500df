// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the ChatBiz ports.
//!
//! All adapters extend the [`ChatbizAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod assist;
pub mod scheduler;
pub mod snapshot;

pub use adapter::ChatbizAdapter;
pub use assist::AssistAdapter;
pub use scheduler::SchedulerAdapter;
pub use snapshot::LocalStore;
