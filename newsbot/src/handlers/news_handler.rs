//! News pipeline for one interaction: notice → fetch → format → deliver.
//!
//! Transport-neutral: replies go through [`Bot`], articles come from [`NewsFetcher`]. The
//! teloxide dispatcher in `telegram::runner` only extracts chat ids and callback data.

use std::sync::Arc;

use news_client::NewsFetcher;
use newsbot_core::{Article, Bot, Category, Chat, MenuButton, Result};
use tracing::{error, info, instrument, warn};

use crate::format::format_articles;

pub const MENU_PROMPT: &str = "Hello! Choose a news category:";
pub const FETCHING_LATEST: &str = "🔍 Fetching latest news, please wait...";
pub const NO_NEWS_FOUND: &str = "⚠ No news found. Try again later.";
pub const NO_ARTICLES_FOUND: &str = "⚠ No news articles found.";
pub const UNKNOWN_CATEGORY: &str = "⚠ Unknown category. Use /start to pick one.";

/// Category keyboard: Crypto and Health on the first row, All on its own row.
pub fn category_menu() -> Vec<Vec<MenuButton>> {
    vec![
        vec![Category::Crypto.into(), Category::Health.into()],
        vec![Category::All.into()],
    ]
}

fn fetching_notice(category: Category) -> String {
    format!("Fetching {} news... 🔎", category)
}

/// Handles the three inbound interactions. Cheap to share behind an `Arc`.
pub struct NewsHandler {
    bot: Arc<dyn Bot>,
    fetcher: NewsFetcher,
}

impl NewsHandler {
    pub fn new(bot: Arc<dyn Bot>, fetcher: NewsFetcher) -> Self {
        Self { bot, fetcher }
    }

    /// `/start` and `/help`: greet and offer the category menu.
    #[instrument(skip(self), fields(chat_id = chat.id))]
    pub async fn handle_start(&self, chat: Chat) -> Result<()> {
        self.bot.send_menu(&chat, MENU_PROMPT, category_menu()).await
    }

    /// Button press. The press is acknowledged first; unknown data is rejected with a notice
    /// instead of being sent to the providers.
    #[instrument(skip(self), fields(chat_id = chat.id))]
    pub async fn handle_category_callback(
        &self,
        chat: Chat,
        callback_id: &str,
        data: &str,
    ) -> Result<()> {
        if let Err(e) = self.bot.answer_callback(callback_id).await {
            warn!(error = %e, "Failed to acknowledge callback");
        }

        let category = match data.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                warn!(error = %e, data = %data, "Rejected callback");
                return self.bot.send_message(&chat, UNKNOWN_CATEGORY).await;
            }
        };

        self.bot.send_message(&chat, &fetching_notice(category)).await?;
        let articles = self.fetcher.fetch(category).await;
        if articles.is_empty() {
            return self.bot.send_message(&chat, NO_NEWS_FOUND).await;
        }
        self.deliver(&chat, &articles).await;
        Ok(())
    }

    /// `/news`: headlines from the catch-all category.
    #[instrument(skip(self), fields(chat_id = chat.id))]
    pub async fn handle_news_command(&self, chat: Chat) -> Result<()> {
        self.bot.send_message(&chat, FETCHING_LATEST).await?;
        let articles = self.fetcher.fetch(Category::All).await;
        if articles.is_empty() {
            return self.bot.send_message(&chat, NO_ARTICLES_FOUND).await;
        }
        self.deliver(&chat, &articles).await;
        Ok(())
    }

    /// Sends one MarkdownV2 message per article. A failed send is logged and the remaining
    /// messages still go out. Returns how many were delivered.
    pub async fn deliver(&self, chat: &Chat, articles: &[Article]) -> usize {
        let messages = format_articles(articles);
        let total = messages.len();
        let mut delivered = 0;
        for (index, text) in messages.iter().enumerate() {
            match self.bot.send_markdown(chat, text).await {
                Ok(()) => delivered += 1,
                Err(e) => error!(chat_id = chat.id, index = index, error = %e, "Failed to send article"),
            }
        }
        info!(chat_id = chat.id, delivered = delivered, total = total, "Delivered articles");
        delivered
    }
}
