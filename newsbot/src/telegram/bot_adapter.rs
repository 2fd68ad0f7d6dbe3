//! Wraps teloxide::Bot and implements [`newsbot_core::Bot`]. Production code sends messages via
//! Telegram; tests substitute a recording Bot.

use async_trait::async_trait;
use newsbot_core::{Bot as CoreBot, Chat, CoreError, MenuButton, Result};
use teloxide::{
    prelude::*,
    types::{CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
};
use tracing::error;

use crate::config::BotConfig;

/// Creates the teloxide bot for `config`, pointing it at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

fn to_inline_keyboard(rows: Vec<Vec<MenuButton>>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.into_iter().map(|row| {
        row.into_iter()
            .map(|button| InlineKeyboardButton::callback(button.label, button.data))
            .collect::<Vec<_>>()
    }))
}

/// Thin wrapper around teloxide::Bot that implements the core Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| CoreError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(|e| CoreError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, rows: Vec<Vec<MenuButton>>) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(to_inline_keyboard(rows))
            .await
            .map_err(|e| CoreError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(|e| CoreError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::category_menu;
    use news_client::NewsConfig;
    use teloxide::types::InlineKeyboardButtonKind;

    fn config_with_api_url(url: Option<&str>) -> BotConfig {
        BotConfig {
            bot_token: "dummy_token".to_string(),
            telegram_api_url: url.map(str::to_string),
            log_file: "logs/test.log".to_string(),
            news: NewsConfig::default(),
        }
    }

    #[test]
    fn test_build_bot_with_custom_api_url() {
        let bot = build_teloxide_bot(&config_with_api_url(Some("http://127.0.0.1:8081/")));
        assert_eq!(bot.api_url().as_str(), "http://127.0.0.1:8081/");
    }

    #[test]
    fn test_build_bot_ignores_invalid_api_url() {
        let default_url = teloxide::Bot::new("dummy_token").api_url();
        let bot = build_teloxide_bot(&config_with_api_url(Some("not a url")));
        assert_eq!(bot.api_url(), default_url);
    }

    /// **Test: the category menu maps to a 2+1 inline keyboard with callback data.**
    #[test]
    fn test_category_menu_keyboard() {
        let markup = to_inline_keyboard(category_menu());

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1].len(), 1);

        let first = &markup.inline_keyboard[0][0];
        assert_eq!(first.text, "💰 Crypto");
        assert!(matches!(
            first.kind,
            InlineKeyboardButtonKind::CallbackData(ref data) if data == "crypto"
        ));
        assert_eq!(markup.inline_keyboard[1][0].text, "🌍 All");
    }
}
