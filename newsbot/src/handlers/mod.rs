//! Chat interaction handlers.

mod news_handler;

pub use news_handler::{
    category_menu, NewsHandler, FETCHING_LATEST, MENU_PROMPT, NO_ARTICLES_FOUND, NO_NEWS_FOUND,
    UNKNOWN_CATEGORY,
};
