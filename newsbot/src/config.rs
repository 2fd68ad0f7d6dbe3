//! Bot configuration: Telegram connection, logging, and news provider keys. Loaded from env.

use anyhow::Result;
use news_client::NewsConfig;
use std::env;

/// Default log file path when LOG_FILE is not set.
pub const DEFAULT_LOG_FILE: &str = "logs/newsbot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TELEGRAM_BOT_TOKEN or BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// Provider keys and locale
    pub news: NewsConfig,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN (or BOT_TOKEN) not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            news: NewsConfig::from_env(),
        })
    }

    /// Rejects an empty token, an unparsable Telegram API URL, and a config with no provider key.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("Telegram bot token is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if !self.news.has_any_key() {
            anyhow::bail!(
                "No news provider configured: set at least one of NEWS_API_KEY, GNEWS_API_KEY, MEDIASTACK_API_KEY"
            );
        }
        Ok(())
    }
}
