//! Article formatting for Telegram MarkdownV2.
//!
//! Only substituted values are escaped; labels and the `*` bold markers are written as-is.

use newsbot_core::Article;

/// Characters MarkdownV2 reserves outside of entities.
pub const MARKDOWN_RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

pub const NO_TITLE: &str = "No title available";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_URL: &str = "#";

/// Prefixes every reserved character with a backslash; everything else is copied unchanged.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if MARKDOWN_RESERVED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn field_or<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}

/// One message block: title, description and link lines. Missing or empty fields fall back to
/// placeholders, which are escaped like any other value.
pub fn format_article(article: &Article) -> String {
    format!(
        "*Title:* {}\n*Description:* {}\n*Read more:* {}\n",
        escape_markdown(field_or(&article.title, NO_TITLE)),
        escape_markdown(field_or(&article.description, NO_DESCRIPTION)),
        escape_markdown(field_or(&article.url, NO_URL)),
    )
}

pub fn format_articles(articles: &[Article]) -> Vec<String> {
    articles.iter().map(format_article).collect()
}
