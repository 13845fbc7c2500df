// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local snapshot persistence for ChatBiz.
//!
//! Exactly two entries survive a restart: the three-field settings snapshot
//! (`user_settings`, `sidebar_collapsed`, `current_language`) and the capped
//! activation-code history. Both live behind the [`LocalStore`] port from
//! `chatbiz-core`, with a file-backed implementation and an in-memory one
//! for tests.
//!
//! [`LocalStore`]: chatbiz_core::LocalStore

pub mod activation;
pub mod file;
pub mod memory;

pub use activation::{record_activation, remember_activation, MAX_HISTORY};
pub use file::{FileLocalStore, ACTIVATIONS_FILE, SNAPSHOT_FILE};
pub use memory::MemoryLocalStore;
