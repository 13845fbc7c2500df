// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stub implementations of the ChatBiz assist and scheduler ports.
//!
//! These adapters synthesize templated responses after fixed artificial
//! delays, standing in for a real AI backend during development and tests.
//!
//! # Components
//!
//! - [`StubAssist`] - templated translation/reply/summary/analysis/composition
//! - [`StubScheduler`] - deterministic send-time suggestions
//! - [`composer`] - the pure template functions behind [`StubAssist`]

pub mod composer;
pub mod scheduler;
pub mod stub;

pub use scheduler::StubScheduler;
pub use stub::{AssistDelays, StubAssist};
