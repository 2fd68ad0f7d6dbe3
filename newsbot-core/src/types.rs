//! Core types: news category, article, chat target, menu button.

use std::fmt;
use std::str::FromStr;

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// News topic a user can pick. Closed set; each variant maps to one provider query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Crypto,
    Health,
    All,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 3] = [Category::Crypto, Category::Health, Category::All];

    /// Query value sent to providers. Crypto is queried as business, which the APIs cover
    /// far better; the catch-all category maps to the empty string.
    pub fn query_param(self) -> &'static str {
        match self {
            Category::Crypto => "business",
            Category::Health => "health",
            Category::All => "",
        }
    }

    /// Tag carried in inline button callback data. Parsed back with [`FromStr`].
    pub fn callback_data(self) -> &'static str {
        match self {
            Category::Crypto => "crypto",
            Category::Health => "health",
            Category::All => "all",
        }
    }

    /// Button label shown in the category menu.
    pub fn label(self) -> &'static str {
        match self {
            Category::Crypto => "💰 Crypto",
            Category::Health => "⚕ Health",
            Category::All => "🌍 All",
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.callback_data() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Upper-case tag, e.g. `CRYPTO`.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.callback_data().to_uppercase())
    }
}

/// One news article as returned by a provider. Every field may be missing, null, or of the wrong
/// type; anything that is not a string is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub url: Option<String>,
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(text) => Some(text),
        Field::Other(_) => None,
    })
}

/// Delivery target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Chat {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Inline keyboard button: visible label plus the data echoed back on press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: String,
    pub data: String,
}

impl From<Category> for MenuButton {
    fn from(category: Category) -> Self {
        Self {
            label: category.label().to_string(),
            data: category.callback_data().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_mapping() {
        assert_eq!(Category::Crypto.query_param(), "business");
        assert_eq!(Category::Health.query_param(), "health");
        assert_eq!(Category::All.query_param(), "");
    }

    /// **Test: callback data round-trips through FromStr for every category.**
    #[test]
    fn test_callback_data_parses_back() {
        for category in Category::ALL {
            assert_eq!(category.callback_data().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = "sports".parse::<Category>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory(ref s) if s == "sports"));
        assert!("".parse::<Category>().is_err());
        assert!("CRYPTO".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_is_upper_case_tag() {
        assert_eq!(Category::Crypto.to_string(), "CRYPTO");
        assert_eq!(Category::Health.to_string(), "HEALTH");
        assert_eq!(Category::All.to_string(), "ALL");
    }

    #[test]
    fn test_menu_button_from_category() {
        let button = MenuButton::from(Category::Health);
        assert_eq!(button.label, "⚕ Health");
        assert_eq!(button.data, "health");
    }

    /// **Test: Article tolerates missing, null and unknown fields.**
    #[test]
    fn test_article_lenient_deserialize() {
        let article: Article = serde_json::from_str(
            r#"{"title": null, "url": "https://example.com", "source": {"name": "X"}}"#,
        )
        .unwrap();
        assert_eq!(article.title, None);
        assert_eq!(article.description, None);
        assert_eq!(article.url.as_deref(), Some("https://example.com"));
    }

    /// **Test: a wrong-typed field is absent; the other fields still decode.**
    #[test]
    fn test_article_wrong_typed_fields_are_absent() {
        let article: Article = serde_json::from_str(
            r#"{"title": 42, "description": {"text": "nested"}, "url": "https://example.com/x"}"#,
        )
        .unwrap();
        assert_eq!(article.title, None);
        assert_eq!(article.description, None);
        assert_eq!(article.url.as_deref(), Some("https://example.com/x"));

        let article: Article = serde_json::from_str(r#"{"title": ["a", "b"], "url": false}"#).unwrap();
        assert_eq!(article, Article::default());
    }
}
