//! Company-wide content: headline stats, CSR initiatives, vision and mission,
//! and customer testimonials.

use serde::{Deserialize, Deserializer, Serialize};

use super::{
    default_true, null_as_default, null_as_true, require, Entity, Ordering, ValidationError,
};

/// Headline figure on the home and about pages ("25+ Years")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyStat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_index: i32,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

impl Entity for CompanyStat {
    const TABLE: &'static str = "company_stats";
    const ORDERING: Ordering = Ordering::Position;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("label", &self.label)?;
        require("value", &self.value)
    }
}

/// Corporate social responsibility initiative
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CsrContent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_index: i32,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

impl Entity for CsrContent {
    const TABLE: &'static str = "csr_content";
    const ORDERING: Ordering = Ordering::Position;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }
}

/// Vision, mission and core values. The table holds one logical row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VisionMission {
    #[serde(default)]
    pub vision: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

impl Entity for VisionMission {
    const TABLE: &'static str = "vision_mission";
    const ORDERING: Ordering = Ordering::NewestFirst;
}

pub const MAX_RATING: i16 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub quote: String,
    #[serde(default = "default_rating", deserialize_with = "rating_or_default")]
    pub rating: i16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_index: i32,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

fn rating_or_default<'de, D>(deserializer: D) -> Result<i16, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i16>::deserialize(deserializer).map(|r| r.unwrap_or_else(default_rating))
}

fn default_rating() -> i16 {
    MAX_RATING
}

impl Entity for Testimonial {
    const TABLE: &'static str = "testimonials";
    const ORDERING: Ordering = Ordering::Position;

    fn validate(&mut self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("quote", &self.quote)?;
        self.rating = self.rating.clamp(0, MAX_RATING);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(rating: i16) -> Testimonial {
        Testimonial {
            name: "Importer".to_string(),
            company: None,
            quote: "Consistent quality".to_string(),
            rating,
            order_index: 0,
            active: true,
        }
    }

    #[test]
    fn rating_is_clamped_to_five_stars() {
        for (input, expected) in [(-3, 0), (0, 0), (4, 4), (5, 5), (9, 5)] {
            let mut t = testimonial(input);
            t.validate().unwrap();
            assert_eq!(t.rating, expected, "rating {input}");
        }
    }

    #[test]
    fn stats_require_label_and_value() {
        let mut stat = CompanyStat {
            label: "Employees".to_string(),
            value: String::new(),
            icon: None,
            order_index: 0,
            active: true,
        };
        assert_eq!(stat.validate().unwrap_err().field, "value");
    }
}
