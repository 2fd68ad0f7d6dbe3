//! Mock implementation of [`newsbot_core::Bot`] for integration tests.
//!
//! Records every outbound call in order so tests can assert on the exact sequence of
//! acknowledgments, notices and article messages without hitting Telegram.

use std::sync::Mutex;

use async_trait::async_trait;
use newsbot_core::{Bot, Chat, CoreError, MenuButton, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Ack(String),
    Text { chat_id: i64, text: String },
    Markdown { chat_id: i64, text: String },
    Menu { chat_id: i64, text: String, rows: Vec<Vec<MenuButton>> },
}

/// Mock Bot that records calls. Markdown sends whose 1-based position is listed in
/// `fail_markdown_at` return an error (the call is still recorded).
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    markdown_calls: Mutex<usize>,
    fail_markdown_at: Vec<usize>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_markdown_at(positions: Vec<usize>) -> Self {
        Self {
            fail_markdown_at: positions,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn markdown_texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Markdown { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Markdown {
            chat_id: chat.id,
            text: text.to_string(),
        });
        let position = {
            let mut calls = self.markdown_calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if self.fail_markdown_at.contains(&position) {
            return Err(CoreError::Bot(format!("Bad Request: message {} rejected", position)));
        }
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, rows: Vec<Vec<MenuButton>>) -> Result<()> {
        self.record(Sent::Menu {
            chat_id: chat.id,
            text: text.to_string(),
            rows,
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.record(Sent::Ack(callback_id.to_string()));
        Ok(())
    }
}
