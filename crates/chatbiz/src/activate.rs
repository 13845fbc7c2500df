// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `chatbiz activate` command implementation.

use chatbiz_config::ChatbizConfig;
use chatbiz_core::ChatbizError;
use chatbiz_storage::{remember_activation, FileLocalStore};

/// Run the `chatbiz activate` command: record the code and print the
/// remembered history, newest first.
pub async fn run_activate(
    config: &ChatbizConfig,
    code: &str,
    organization: &str,
) -> Result<(), ChatbizError> {
    let store = FileLocalStore::new(&config.storage.data_dir);
    let history = remember_activation(&store, code, organization).await?;

    println!("remembered activation codes:");
    for record in &history {
        println!(
            "  {}  {:<20} {}",
            record.last_used.format("%Y-%m-%d %H:%M"),
            record.code,
            record.organization_name,
        );
    }
    Ok(())
}
