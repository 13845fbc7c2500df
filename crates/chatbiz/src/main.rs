// SPDX-FileCopyrightText: 2026 ChatBiz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ChatBiz - a multi-platform customer-service chat workbench.
//!
//! This is the binary entry point. Commands operate on the bundled demo
//! data through the same store, filter engine, and adapter ports the full
//! workbench uses.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use chatbiz_assist::{AssistDelays, StubAssist};
use chatbiz_config::ChatbizConfig;
use chatbiz_core::{AssistAdapter, ChatbizError};
use chatbiz_storage::FileLocalStore;
use chatbiz_store::AppStore;

mod accounts;
mod activate;
mod assist;
mod list;
mod suggest;

/// ChatBiz - a multi-platform customer-service chat workbench.
#[derive(Parser, Debug)]
#[command(name = "chatbiz", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List conversations through the filter engine.
    List(list::ListArgs),
    /// List platform accounts.
    Accounts(accounts::AccountsArgs),
    /// Draft an AI reply for a conversation and append it to the thread.
    Reply {
        /// Conversation id, e.g. "conv-wa-1".
        conversation: String,
    },
    /// Summarize a conversation.
    Summarize {
        conversation: String,
    },
    /// Translate one message of a conversation.
    Translate {
        conversation: String,
        message: String,
        /// Target language code, e.g. "en".
        language: String,
    },
    /// Compose outbound message drafts.
    Compose(assist::ComposeArgs),
    /// Polish an agent-written draft.
    Polish {
        content: String,
        /// friendly, professional, or casual.
        #[arg(long, default_value = "friendly")]
        tone: String,
    },
    /// Suggest a send time from contact-time preferences.
    Suggest(suggest::SuggestArgs),
    /// Record a login activation code and show the remembered history.
    Activate {
        code: String,
        organization: String,
    },
    /// Print the resolved configuration.
    Config,
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chatbiz={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

/// The stub assist port configured with the artificial delays from config.
pub(crate) fn assist_from_config(config: &ChatbizConfig) -> Arc<dyn AssistAdapter> {
    Arc::new(StubAssist::with_delays(AssistDelays {
        translate: Duration::from_millis(config.assist.translate_delay_ms),
        reply: Duration::from_millis(config.assist.reply_delay_ms),
        summary: Duration::from_millis(config.assist.summary_delay_ms),
        analyze: Duration::from_millis(config.assist.analyze_delay_ms),
        compose: Duration::from_millis(config.assist.compose_delay_ms),
        polish: Duration::from_millis(config.assist.polish_delay_ms),
    }))
}

/// A store seeded with the demo data and wired to the configured ports.
pub(crate) fn demo_store(config: &ChatbizConfig) -> AppStore {
    AppStore::with_fixtures(assist_from_config(config))
        .with_local(Arc::new(FileLocalStore::new(&config.storage.data_dir)))
}

/// Parses a CLI value into one of the core enums via its `FromStr`.
pub(crate) fn parse_value<T>(kind: &str, value: &str) -> Result<T, ChatbizError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| ChatbizError::Config(format!("invalid {kind} '{value}': {e}")))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match chatbiz_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            chatbiz_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::List(args)) => list::run_list(&config, args),
        Some(Commands::Accounts(args)) => accounts::run_accounts(&config, args),
        Some(Commands::Reply { conversation }) => {
            assist::run_reply(&config, &conversation).await
        }
        Some(Commands::Summarize { conversation }) => {
            assist::run_summarize(&config, &conversation).await
        }
        Some(Commands::Translate { conversation, message, language }) => {
            assist::run_translate(&config, &conversation, &message, &language).await
        }
        Some(Commands::Compose(args)) => assist::run_compose(&config, args).await,
        Some(Commands::Polish { content, tone }) => {
            assist::run_polish(&config, &content, &tone).await
        }
        Some(Commands::Suggest(args)) => suggest::run_suggest(&config, args).await,
        Some(Commands::Activate { code, organization }) => {
            activate::run_activate(&config, &code, &organization).await
        }
        Some(Commands::Config) => run_config(&config),
        None => {
            println!("chatbiz: use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("chatbiz: {err}");
        std::process::exit(1);
    }
}

/// Run the `chatbiz config` command: print the resolved configuration.
fn run_config(config: &ChatbizConfig) -> Result<(), ChatbizError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| ChatbizError::Internal(format!("failed to render config: {e}")))?;
    print!("{rendered}");
    Ok(())
}
