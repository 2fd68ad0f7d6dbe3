//! Response normalization. Providers disagree on where the article list lives: NewsAPI and
//! GNews use `articles`, MediaStack uses `data`.

use newsbot_core::Article;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    articles: Option<Vec<Article>>,
    #[serde(default)]
    data: Option<Vec<Article>>,
}

/// Extracts the article list from a provider body.
///
/// `articles` wins when present (even if empty), then `data`. A body with neither field is an
/// empty list, not an error. Anything that is not a JSON object of that shape is a decode error.
pub fn parse_articles(body: &[u8]) -> Result<Vec<Article>, serde_json::Error> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    Ok(envelope.articles.or(envelope.data).unwrap_or_default())
}
