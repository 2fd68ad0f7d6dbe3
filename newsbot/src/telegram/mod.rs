//! Telegram layer: teloxide-backed [`newsbot_core::Bot`], command set, dispatcher runner.

mod bot_adapter;
mod commands;
mod runner;

pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use commands::Command;
pub use runner::{run_dispatcher, wait_for_shutdown_signal};
