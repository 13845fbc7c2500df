// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `chatbiz accounts` command implementation.

use clap::Args;

use chatbiz_config::ChatbizConfig;
use chatbiz_core::{ChatbizError, Platform, PlatformAccount};

use crate::{demo_store, parse_value};

/// Flags for the `chatbiz accounts` command.
#[derive(Args, Debug)]
pub struct AccountsArgs {
    /// Restrict to one platform.
    #[arg(long)]
    platform: Option<String>,
}

/// Run the `chatbiz accounts` command: list accounts, defaults marked.
pub fn run_accounts(config: &ChatbizConfig, args: AccountsArgs) -> Result<(), ChatbizError> {
    let store = demo_store(config);

    let platforms: Vec<Platform> = match &args.platform {
        Some(platform) => vec![parse_value("platform", platform)?],
        None => vec![
            Platform::Whatsapp,
            Platform::Telegram,
            Platform::Line,
            Platform::Messenger,
            Platform::Instagram,
            Platform::Wechat,
        ],
    };

    for platform in platforms {
        let accounts = store.platform_accounts(platform);
        if accounts.is_empty() {
            continue;
        }
        println!("{platform}:");
        for account in accounts {
            print_account(account);
        }
    }
    Ok(())
}

fn print_account(account: &PlatformAccount) {
    let default_marker = if account.is_default { "*" } else { " " };
    let proxy = account.proxy_region.as_deref().unwrap_or("-");
    println!(
        "  {default_marker} {:<24} {:<20} {:<13} msgs:{:<6} proxy:{}",
        account.id.0, account.name, account.status, account.message_count, proxy,
    );
}
