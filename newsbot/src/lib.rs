//! # NewsBot
//!
//! Telegram bot that relays top headlines by category. Wires the news-client fallback fetcher,
//! the MarkdownV2 formatter and the teloxide dispatcher; config comes from env.

pub mod cli;
pub mod config;
pub mod format;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use format::{escape_markdown, format_article, format_articles};
pub use handlers::NewsHandler;
pub use runner::run_bot;
pub use telegram::{Command, TelegramBotAdapter};
