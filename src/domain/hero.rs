//! Home page hero tiles and slides.

use serde::{Deserialize, Serialize};

use super::{
    default_true, null_as_default, null_as_true, require, Entity, Ordering, ValidationError,
};

/// Promotional tile linking to a sector page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroCard {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default)]
    pub secondary_image: Option<String>,
    #[serde(default)]
    pub tertiary_image: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_index: i32,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

impl Entity for HeroCard {
    const TABLE: &'static str = "hero_cards";
    const ORDERING: Ordering = Ordering::Position;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }
}

/// Auto-advancing banner slide
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroSlide {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default)]
    pub secondary_image: Option<String>,
    #[serde(default)]
    pub tertiary_image: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_index: i32,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

impl Entity for HeroSlide {
    const TABLE: &'static str = "hero_slides";
    const ORDERING: Ordering = Ordering::Position;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }
}
