//! News article domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, require, Entity, Ordering, ValidationError};

/// News article entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Entity for NewsArticle {
    const TABLE: &'static str = "news_articles";
    const ORDERING: Ordering = Ordering::NewestFirst;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        if self.published && self.published_at.is_none() {
            self.published_at = Some(Utc::now());
        }
        Ok(())
    }
}
