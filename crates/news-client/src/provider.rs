//! HTTP news providers. One [`HttpNewsProvider`] type serves all three APIs; the
//! [`ProviderKind`] decides the default endpoint and how the query string is built.

use async_trait::async_trait;
use newsbot_core::{Article, Category};
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Locale;
use crate::error::NewsError;
use crate::response::parse_articles;
use crate::NewsProvider;

/// Masks an access key for logging: `***` plus the last 4 characters, or just `***` when the
/// key is 8 characters or shorter.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "***".to_string()
    } else {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("***{}", tail)
    }
}

/// The supported news APIs, in their default fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    NewsApi,
    GNews,
    MediaStack,
}

impl ProviderKind {
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::NewsApi => "NewsAPI",
            ProviderKind::GNews => "GNews",
            ProviderKind::MediaStack => "MediaStack",
        }
    }

    /// Public endpoint. MediaStack's free tier only serves plain HTTP.
    pub fn default_endpoint(self) -> &'static str {
        match self {
            ProviderKind::NewsApi => "https://newsapi.org/v2/top-headlines",
            ProviderKind::GNews => "https://gnews.io/api/v4/top-headlines",
            ProviderKind::MediaStack => "http://api.mediastack.com/v1/news",
        }
    }

    /// Query parameters for one request. The category parameter is omitted when `query` is
    /// empty so the catch-all category asks for unfiltered headlines.
    pub fn query_params(self, query: &str, api_key: &str, locale: &Locale) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        let category_key = match self {
            ProviderKind::MediaStack => "categories",
            ProviderKind::NewsApi | ProviderKind::GNews => "category",
        };
        if !query.is_empty() {
            params.push((category_key, query.to_string()));
        }
        match self {
            ProviderKind::NewsApi => {
                params.push(("country", locale.country.clone()));
                params.push(("apiKey", api_key.to_string()));
            }
            ProviderKind::GNews => {
                params.push(("lang", locale.language.clone()));
                params.push(("country", locale.country.clone()));
                params.push(("apikey", api_key.to_string()));
            }
            ProviderKind::MediaStack => {
                params.push(("countries", locale.country.clone()));
                params.push(("access_key", api_key.to_string()));
            }
        }
        params
    }
}

/// A news API reached over HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpNewsProvider {
    kind: ProviderKind,
    client: Client,
    api_key: String,
    base_url: String,
    locale: Locale,
}

impl HttpNewsProvider {
    /// Creates a provider on its public endpoint. `client` is shared between providers.
    pub fn new(kind: ProviderKind, client: Client, api_key: String, locale: Locale) -> Self {
        Self {
            kind,
            client,
            api_key,
            base_url: kind.default_endpoint().to_string(),
            locale,
        }
    }

    /// Points the provider at another endpoint (e.g. a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Full request URL for `category`, with the access key in the query string.
    pub fn build_url(&self, category: Category) -> Result<Url, NewsError> {
        let params = self
            .kind
            .query_params(category.query_param(), &self.api_key, &self.locale);
        Url::parse_with_params(&self.base_url, params).map_err(|source| NewsError::InvalidUrl {
            provider: self.name().to_string(),
            source,
        })
    }
}

#[async_trait]
impl NewsProvider for HttpNewsProvider {
    fn name(&self) -> &str {
        self.kind().name()
    }

    #[instrument(skip(self), fields(provider = %self.name()))]
    async fn fetch(&self, category: Category) -> Result<Vec<Article>, NewsError> {
        let url = self.build_url(category)?;
        debug!(
            endpoint = %self.base_url,
            api_key = %mask_key(&self.api_key),
            "Requesting headlines"
        );

        let http_err = |source| NewsError::Http {
            provider: self.name().to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status {
                provider: self.name().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_err)?;
        parse_articles(&body).map_err(|source| NewsError::Decode {
            provider: self.name().to_string(),
            source,
        })
    }
}
