//! Provider configuration loaded from environment variables.

use std::env;

/// Country and language sent to providers that accept them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub country: String,
    pub language: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            country: "in".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Access keys for the three providers plus the locale. A provider without a key is left out
/// of the fetch order.
#[derive(Debug, Clone, Default)]
pub struct NewsConfig {
    pub news_api_key: Option<String>,
    pub gnews_api_key: Option<String>,
    pub mediastack_api_key: Option<String>,
    pub locale: Locale,
}

impl NewsConfig {
    /// Loads from env: NEWS_API_KEY, GNEWS_API_KEY, MEDIASTACK_API_KEY (blank counts as unset),
    /// NEWS_COUNTRY (default `in`), NEWS_LANGUAGE (default `en`).
    pub fn from_env() -> Self {
        let defaults = Locale::default();
        Self {
            news_api_key: non_blank_var("NEWS_API_KEY"),
            gnews_api_key: non_blank_var("GNEWS_API_KEY"),
            mediastack_api_key: non_blank_var("MEDIASTACK_API_KEY"),
            locale: Locale {
                country: non_blank_var("NEWS_COUNTRY").unwrap_or(defaults.country),
                language: non_blank_var("NEWS_LANGUAGE").unwrap_or(defaults.language),
            },
        }
    }

    /// True when at least one provider can be queried.
    pub fn has_any_key(&self) -> bool {
        self.news_api_key.is_some() || self.gnews_api_key.is_some() || self.mediastack_api_key.is_some()
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
