//! Ordered fallback across providers: first non-empty answer wins.

use std::sync::Arc;

use newsbot_core::{Article, Category};
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::config::NewsConfig;
use crate::provider::{mask_key, HttpNewsProvider, ProviderKind};
use crate::NewsProvider;

/// Most articles returned by one fetch.
pub const MAX_ARTICLES: usize = 5;

/// Queries providers one by one in a fixed order.
#[derive(Clone)]
pub struct NewsFetcher {
    providers: Vec<Arc<dyn NewsProvider>>,
    max_articles: usize,
}

impl NewsFetcher {
    /// Creates a fetcher over `providers`, tried in the given order.
    pub fn new(providers: Vec<Arc<dyn NewsProvider>>) -> Self {
        Self {
            providers,
            max_articles: MAX_ARTICLES,
        }
    }

    /// Builds the NewsAPI → GNews → MediaStack chain from configured keys. Providers without
    /// a key are skipped with a warning; all providers share one HTTP client.
    pub fn from_config(config: &NewsConfig) -> Self {
        let client = Client::new();
        let keyed = [
            (ProviderKind::NewsApi, &config.news_api_key),
            (ProviderKind::GNews, &config.gnews_api_key),
            (ProviderKind::MediaStack, &config.mediastack_api_key),
        ];

        let mut providers: Vec<Arc<dyn NewsProvider>> = Vec::with_capacity(keyed.len());
        for (kind, key) in keyed {
            match key {
                Some(key) => {
                    info!(provider = kind.name(), api_key = %mask_key(key), "Provider enabled");
                    providers.push(Arc::new(HttpNewsProvider::new(
                        kind,
                        client.clone(),
                        key.clone(),
                        config.locale.clone(),
                    )));
                }
                None => warn!(provider = kind.name(), "No API key configured, provider disabled"),
            }
        }

        Self::new(providers)
    }

    /// Names of the configured providers, in fetch order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Returns up to [`MAX_ARTICLES`] articles from the first provider with a non-empty answer.
    /// Failures and empty answers are logged and the next provider is tried; when every
    /// provider is exhausted the result is empty.
    #[instrument(skip(self, category), fields(category = %category))]
    pub async fn fetch(&self, category: Category) -> Vec<Article> {
        for provider in &self.providers {
            match provider.fetch(category).await {
                Ok(mut articles) if !articles.is_empty() => {
                    let total = articles.len();
                    articles.truncate(self.max_articles);
                    info!(
                        provider = provider.name(),
                        total = total,
                        returned = articles.len(),
                        "Fetched articles"
                    );
                    return articles;
                }
                Ok(_) => {
                    warn!(provider = provider.name(), "Provider returned no articles, trying next");
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "Provider failed, trying next");
                }
            }
        }

        warn!(providers = self.providers.len(), "All providers exhausted without articles");
        Vec::new()
    }
}
