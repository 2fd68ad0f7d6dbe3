//! Delivery abstraction.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in the newsbot crate
//! (`TelegramBotAdapter`). Tests substitute a recording implementation.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Chat, MenuButton};

/// Outbound chat capability. Every call is independent and reports its own success or failure.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain-text message.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message rendered as MarkdownV2. `text` must already be escaped.
    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a plain-text message with an inline keyboard, one inner `Vec` per row.
    async fn send_menu(&self, chat: &Chat, text: &str, rows: Vec<Vec<MenuButton>>) -> Result<()>;
    /// Acknowledges a button press so the client stops showing a spinner.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}
