//! Sector page resolution.
//!
//! A sector route resolves to the admin-authored page when both the sector row and
//! its content row exist, and to a generic fallback page otherwise. Missing rows and
//! backend failures end up on the same fallback; nothing is reported to visitors.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::fallback::{is_present, text, text_or};
use super::images::placeholder_for;
use crate::domain::sectors::{normalize_route, BusinessContent, BusinessSector};
use crate::domain::{Entity, Record};
use crate::services::{BackendError, Query, SupabaseClient};

pub const UNAVAILABLE_TITLE: &str = "Content Currently Unavailable";
pub const UNAVAILABLE_MESSAGE: &str = "Detailed information for this business is being prepared. \
     Please check back soon or contact us to learn more.";

/// Where sector and content rows come from.
#[async_trait]
pub trait SectorSource: Send + Sync {
    async fn sector_by_route(
        &self,
        route: &str,
    ) -> Result<Option<Record<BusinessSector>>, BackendError>;

    async fn content_for_sector(
        &self,
        sector_id: Uuid,
    ) -> Result<Option<Record<BusinessContent>>, BackendError>;
}

#[async_trait]
impl SectorSource for SupabaseClient {
    async fn sector_by_route(
        &self,
        route: &str,
    ) -> Result<Option<Record<BusinessSector>>, BackendError> {
        let query = Query::new().eq("route", route).flag("active");
        self.select_one(BusinessSector::TABLE, &query).await
    }

    async fn content_for_sector(
        &self,
        sector_id: Uuid,
    ) -> Result<Option<Record<BusinessContent>>, BackendError> {
        let query = Query::new().eq("sector_id", sector_id);
        self.select_one(BusinessContent::TABLE, &query).await
    }
}

// ============================================================================
// Fallback copy
// ============================================================================

/// Title and description shown when a sector has no authored content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCopy {
    pub title: String,
    pub description: String,
}

const KNOWN_SECTORS: &[(&str, &str, &str)] = &[
    (
        "coffee",
        "Ethiopian Coffee Export",
        "Premium highland coffee, sourced from Ethiopian growers and exported worldwide.",
    ),
    (
        "avocado",
        "Avocado Export",
        "Fresh Ethiopian avocados grown, graded and packed for international markets.",
    ),
    (
        "ceramic-tiles",
        "Ceramic Tiles",
        "Durable wall and floor tiles manufactured to international standards.",
    ),
    (
        "bathroom",
        "Bathroom Solutions",
        "Sanitary ware and complete bathroom fittings for homes and projects.",
    ),
    (
        "manufacturing",
        "Manufacturing",
        "Industrial production serving construction and consumer markets.",
    ),
    (
        "agriculture",
        "Agriculture",
        "Commercial farming and agro-processing across Ethiopia.",
    ),
    (
        "real-estate",
        "Real Estate",
        "Residential and commercial property development.",
    ),
    (
        "import-export",
        "Import & Export",
        "Trading and logistics connecting local producers with global buyers.",
    ),
];

/// Fallback copy for a route: the known table first, otherwise derived from the slug.
pub fn fallback_copy_for(route: &str) -> FallbackCopy {
    let slug = normalize_route(route).trim_start_matches('/').to_lowercase();

    if let Some((_, title, description)) = KNOWN_SECTORS.iter().find(|(s, _, _)| *s == slug) {
        return FallbackCopy {
            title: title.to_string(),
            description: description.to_string(),
        };
    }

    let title = slug
        .split(|c| c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let title = if title.is_empty() {
        "Our Businesses".to_string()
    } else {
        title
    };

    FallbackCopy {
        description: format!("Learn more about our {} business.", title),
        title,
    }
}

// ============================================================================
// Page model
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectorPage {
    Authored(AuthoredPage),
    Fallback(FallbackPage),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectorSummary {
    pub id: Uuid,
    pub title: String,
    pub route: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthoredPage {
    pub sector: SectorSummary,
    pub meta_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeaturesView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub background_image: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AboutView {
    pub title: String,
    pub content: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeaturesView {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CtaView {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FallbackPage {
    pub hero: HeroView,
    pub notice: Notice,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve `route` to a page. Never fails.
pub async fn resolve_sector_page<S>(source: &S, route: &str, fallback: &FallbackCopy) -> SectorPage
where
    S: SectorSource + ?Sized,
{
    let route = normalize_route(route);

    let sector = match source.sector_by_route(&route).await {
        Ok(Some(sector)) => sector,
        Ok(None) => {
            tracing::debug!(route = %route, "No sector row, rendering fallback");
            return fallback_page(fallback);
        }
        Err(e) => {
            tracing::warn!(route = %route, error = %e, "Sector lookup failed, rendering fallback");
            return fallback_page(fallback);
        }
    };

    match source.content_for_sector(sector.id).await {
        Ok(Some(content)) => SectorPage::Authored(render_sections(&sector, &content)),
        Ok(None) => {
            tracing::debug!(route = %route, sector_id = %sector.id, "No content row, rendering fallback");
            fallback_page(fallback)
        }
        Err(e) => {
            tracing::warn!(
                route = %route,
                sector_id = %sector.id,
                error = %e,
                "Content lookup failed, rendering fallback"
            );
            fallback_page(fallback)
        }
    }
}

/// Build the sections that have something to show.
///
/// A section appears only when its title is non-blank (the gallery when it has at
/// least one image); missing sub-fields of a shown section become `""`.
pub fn render_sections(sector: &Record<BusinessSector>, content: &BusinessContent) -> AuthoredPage {
    let hero = content
        .hero
        .as_ref()
        .filter(|h| is_present(h.title.as_deref()))
        .map(|h| HeroView {
            title: text(h.title.as_deref()),
            subtitle: text(h.subtitle.as_deref()),
            description: text(h.description.as_deref()),
            background_image: text(h.background_image.as_deref()),
        });

    let about = content
        .about
        .as_ref()
        .filter(|a| is_present(a.title.as_deref()))
        .map(|a| AboutView {
            title: text(a.title.as_deref()),
            content: text(a.content.as_deref()),
            image: text(a.image.as_deref()),
        });

    let features = content
        .features
        .as_ref()
        .filter(|f| is_present(f.title.as_deref()))
        .map(|f| FeaturesView {
            title: text(f.title.as_deref()),
            items: f
                .items
                .iter()
                .filter(|i| is_present(Some(i.as_str())))
                .map(|i| i.trim().to_string())
                .collect(),
        });

    let gallery = content
        .gallery
        .as_ref()
        .map(|images| {
            images
                .iter()
                .filter(|i| is_present(Some(i.as_str())))
                .map(|i| i.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|images| !images.is_empty());

    let cta = content
        .cta
        .as_ref()
        .filter(|c| is_present(c.title.as_deref()))
        .map(|c| CtaView {
            title: text(c.title.as_deref()),
            description: text(c.description.as_deref()),
            button_text: text(c.button_text.as_deref()),
            button_link: text(c.button_link.as_deref()),
        });

    AuthoredPage {
        sector: SectorSummary {
            id: sector.id,
            title: sector.title.clone(),
            route: sector.route.clone(),
        },
        meta_description: text_or(
            content.meta_description.as_deref(),
            &text(sector.description.as_deref()),
        ),
        hero,
        about,
        features,
        gallery,
        cta,
    }
}

pub fn fallback_page(copy: &FallbackCopy) -> SectorPage {
    SectorPage::Fallback(FallbackPage {
        hero: HeroView {
            title: copy.title.clone(),
            subtitle: String::new(),
            description: copy.description.clone(),
            background_image: placeholder_for(&copy.title).to_string(),
        },
        notice: Notice {
            title: UNAVAILABLE_TITLE.to_string(),
            message: UNAVAILABLE_MESSAGE.to_string(),
        },
    })
}
