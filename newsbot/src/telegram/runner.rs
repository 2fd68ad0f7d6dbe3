//! Dispatcher runner: routes commands and button presses to [`NewsHandler`] and stops on
//! SIGINT / SIGTERM.

use std::sync::Arc;

use anyhow::Result;
use newsbot_core::Chat as CoreChat;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument, warn};

use super::commands::Command;
use crate::handlers::NewsHandler;

/// Resolves when the process receives SIGINT or SIGTERM (Ctrl-C only on non-unix targets).
/// Returns the signal name.
pub async fn wait_for_shutdown_signal() -> &'static str {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    res = tokio::signal::ctrl_c() => {
                        if let Err(e) = res {
                            error!(error = %e, "Failed to listen for SIGINT");
                        }
                        "SIGINT"
                    }
                    _ = sigterm.recv() => "SIGTERM",
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler, listening for SIGINT only");
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!(error = %e, "Failed to listen for SIGINT");
                }
                "SIGINT"
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
        }
        "SIGINT"
    }
}

async fn on_command(msg: Message, cmd: Command, handler: Arc<NewsHandler>) -> ResponseResult<()> {
    let chat = CoreChat::new(msg.chat.id.0);
    let user_id = msg.from.as_ref().map(|u| u.id.0).unwrap_or(0);
    info!(user_id = user_id, chat_id = chat.id, command = ?cmd, "Received command");

    let result = match cmd {
        Command::Start | Command::Help => handler.handle_start(chat).await,
        Command::News => handler.handle_news_command(chat).await,
    };
    if let Err(e) = result {
        error!(chat_id = chat.id, command = ?cmd, error = %e, "Command failed");
    }
    Ok(())
}

async fn on_callback(query: CallbackQuery, handler: Arc<NewsHandler>) -> ResponseResult<()> {
    // Inline keyboards are only sent to the chat that asked, so the message chat is the target;
    // the sender's private chat is the fallback when Telegram omits the message.
    let chat_id = query
        .message
        .as_ref()
        .map(|m| m.chat().id.0)
        .unwrap_or(query.from.id.0 as i64);
    let chat = CoreChat::new(chat_id);
    let data = query.data.as_deref().unwrap_or_default();
    info!(user_id = query.from.id.0, chat_id = chat.id, data = %data, "Received button press");

    if let Err(e) = handler
        .handle_category_callback(chat, &query.id.0, data)
        .await
    {
        error!(chat_id = chat.id, error = %e, "Callback failed");
    }
    Ok(())
}

/// Runs the long-polling dispatcher until a shutdown signal arrives.
#[instrument(skip(bot, handler))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler: Arc<NewsHandler>) -> Result<()> {
    let schema = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(Update::filter_callback_query().endpoint(on_callback));

    let mut dispatcher = Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler])
        .default_handler(|update| async move {
            debug!(update_id = ?update.id, "Ignoring unsupported update");
        })
        .build();

    let shutdown = dispatcher.shutdown_token();
    tokio::spawn(async move {
        let signal = wait_for_shutdown_signal().await;
        info!(signal = signal, "Shutdown signal received, stopping dispatcher");
        match shutdown.shutdown() {
            Ok(stopped) => stopped.await,
            Err(e) => warn!(error = ?e, "Dispatcher was not running"),
        }
    });

    info!("Dispatcher started");
    dispatcher.dispatch().await;
    info!("Dispatcher stopped");

    Ok(())
}
