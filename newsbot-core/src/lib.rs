//! # newsbot-core
//!
//! Core types and traits for the news bot: [`Category`], [`Article`], the [`Bot`] delivery trait,
//! errors, and tracing initialization. Transport-agnostic; used by news-client and newsbot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{CoreError, Result};
pub use logger::init_tracing;
pub use types::{Article, Category, Chat, MenuButton};
