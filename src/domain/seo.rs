//! Per-page search metadata.

use serde::{Deserialize, Serialize};

use super::{require, sectors::normalize_route, Entity, Ordering, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeoSetting {
    pub page_path: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
}

impl Entity for SeoSetting {
    const TABLE: &'static str = "seo_settings";
    const ORDERING: Ordering = Ordering::NewestFirst;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("page_path", &self.page_path)?;
        self.page_path = normalize_route(&self.page_path);
        Ok(())
    }
}
