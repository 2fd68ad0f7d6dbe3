//! # News client
//!
//! Defines the [`NewsProvider`] trait, the three HTTP providers behind it ([`HttpNewsProvider`]
//! with a [`ProviderKind`]), and [`NewsFetcher`], which tries providers in a fixed order and
//! returns the first non-empty result.
//!
//! Providers are queried strictly one after another; there is no caching, merging or retrying
//! of the same provider.

use async_trait::async_trait;
use newsbot_core::{Article, Category};

mod config;
mod error;
mod fetcher;
mod provider;
mod response;

pub use config::{Locale, NewsConfig};
pub use error::NewsError;
pub use fetcher::{NewsFetcher, MAX_ARTICLES};
pub use provider::{mask_key, HttpNewsProvider, ProviderKind};
pub use response::parse_articles;

/// A news source that can be asked for the top articles of a category.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Issues one request for `category`. An empty `Vec` means the provider answered but had
    /// nothing; transport, status and body problems are errors.
    async fn fetch(&self, category: Category) -> Result<Vec<Article>, NewsError>;
}
