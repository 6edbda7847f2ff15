//! Business sector domain types
//!
//! A sector is one line of business with its own route. Its long-form page
//! content lives in a separate one-to-one `business_content` row whose sections
//! are semi-structured JSON columns.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    default_true, null_as_default, null_as_true, require, Entity, Ordering, ValidationError,
};

/// Business sector entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessSector {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    pub route: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_index: i32,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

impl Entity for BusinessSector {
    const TABLE: &'static str = "business_sectors";
    const ORDERING: Ordering = Ordering::Position;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("route", &self.route)?;
        self.route = normalize_route(&self.route);
        Ok(())
    }
}

/// Sector routes are stored with exactly one leading slash (`/coffee`).
pub fn normalize_route(route: &str) -> String {
    format!("/{}", route.trim().trim_matches('/'))
}

// ============================================================================
// Sector content sections
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HeroSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AboutSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeaturesSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CtaSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
}

/// Admin-authored page content for one sector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessContent {
    /// Taken from the URL on admin writes, so request bodies may omit it
    #[serde(default)]
    pub sector_id: Uuid,
    #[serde(default)]
    pub hero: Option<HeroSection>,
    #[serde(default)]
    pub about: Option<AboutSection>,
    #[serde(default)]
    pub features: Option<FeaturesSection>,
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
    #[serde(default)]
    pub cta: Option<CtaSection>,
    #[serde(default)]
    pub meta_description: Option<String>,
}

impl BusinessContent {
    /// Content for a sector that has never been edited.
    pub fn empty(sector_id: Uuid) -> Self {
        Self {
            sector_id,
            hero: None,
            about: None,
            features: None,
            gallery: None,
            cta: None,
            meta_description: None,
        }
    }
}

impl Entity for BusinessContent {
    const TABLE: &'static str = "business_content";
    const ORDERING: Ordering = Ordering::NewestFirst;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn routes_get_a_single_leading_slash() {
        assert_eq!(normalize_route("coffee"), "/coffee");
        assert_eq!(normalize_route("/coffee/"), "/coffee");
        assert_eq!(normalize_route("  //ceramic-tiles "), "/ceramic-tiles");
    }

    #[test]
    fn sector_validation_requires_title_and_route() {
        let mut sector = BusinessSector {
            title: "Coffee".to_string(),
            description: None,
            image_url: None,
            features: vec![],
            route: "coffee".to_string(),
            order_index: 0,
            active: true,
        };
        sector.validate().unwrap();
        assert_eq!(sector.route, "/coffee");

        sector.title = " ".to_string();
        assert_eq!(sector.validate().unwrap_err().field, "title");
    }

    #[test]
    fn content_sections_tolerate_missing_subfields() {
        let content: BusinessContent = serde_json::from_value(json!({
            "sector_id": Uuid::nil(),
            "hero": { "title": "Coffee" },
            "features": { "title": "Why us" },
            "gallery": null
        }))
        .unwrap();

        let hero = content.hero.unwrap();
        assert_eq!(hero.title.as_deref(), Some("Coffee"));
        assert!(hero.subtitle.is_none());
        assert!(content.features.unwrap().items.is_empty());
        assert!(content.gallery.is_none());
        assert!(content.cta.is_none());
    }
}
