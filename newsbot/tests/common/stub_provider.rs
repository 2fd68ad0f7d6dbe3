//! Scripted [`news_client::NewsProvider`] that counts calls and returns a fixed outcome.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use news_client::{NewsError, NewsProvider};
use newsbot_core::{Article, Category};

pub enum Outcome {
    Articles(Vec<Article>),
    Status(u16),
}

pub struct StubProvider {
    name: String,
    outcome: Outcome,
    calls: AtomicUsize,
    categories: Mutex<Vec<Category>>,
}

impl StubProvider {
    pub fn new(name: &str, outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            outcome,
            calls: AtomicUsize::new(0),
            categories: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsProvider for StubProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, category: Category) -> Result<Vec<Article>, NewsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.categories.lock().unwrap().push(category);
        match &self.outcome {
            Outcome::Articles(articles) => Ok(articles.clone()),
            Outcome::Status(status) => Err(NewsError::Status {
                provider: self.name.clone(),
                status: *status,
            }),
        }
    }
}

pub fn article(i: usize) -> Article {
    Article {
        title: Some(format!("Headline {}.", i)),
        description: Some(format!("Details (part {})", i)),
        url: Some(format!("https://news.example/{}", i)),
    }
}
