use anyhow::{Context, Result};
use news_client::NewsFetcher;
use newsbot_core::init_tracing;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument, warn};

use crate::config::BotConfig;
use crate::handlers::NewsHandler;
use crate::telegram::{build_teloxide_bot, run_dispatcher, Command, TelegramBotAdapter};

/// Main entry: init logging, validate config, verify the token, build the fetch pipeline, then
/// dispatch updates until SIGINT / SIGTERM. Any startup error is logged and returned.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e);
    }

    let bot = build_teloxide_bot(&config);
    let me = match bot.get_me().await {
        Ok(me) => me,
        Err(e) => {
            error!(error = %e, "Bot failed to launch");
            return Err(e).context("Failed to connect to Telegram (getMe)");
        }
    };
    info!(username = ?me.user.username, "Connected to Telegram");

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register command list");
    }

    let fetcher = NewsFetcher::from_config(&config.news);
    info!(providers = ?fetcher.provider_names(), "News providers ready");

    let handler = Arc::new(NewsHandler::new(
        Arc::new(TelegramBotAdapter::new(bot.clone())),
        fetcher,
    ));

    info!("NewsBot is running");
    run_dispatcher(bot, handler).await?;
    info!("NewsBot stopped");

    Ok(())
}
