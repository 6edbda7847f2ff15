//! Public page models.
//!
//! Each builder fetches the rows its page needs and completes every optional
//! field from hardcoded defaults. A failed fetch is logged and treated as "no
//! rows", so public pages always render.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::fallback::{excerpt, is_present, list_or, text, text_or, ApplyDefaults};
use super::images::{fallback_chain, intervals, placeholder_for, resolve_images, GENERIC_PLACEHOLDER};
use super::resolver::fallback_copy_for;
use crate::domain::careers::JobPosition;
use crate::domain::company::{CompanyStat, CsrContent, Testimonial, VisionMission};
use crate::domain::hero::{HeroCard, HeroSlide};
use crate::domain::news::NewsArticle;
use crate::domain::sectors::BusinessSector;
use crate::domain::seo::SeoSetting;
use crate::domain::team::TeamMember;
use crate::domain::{Entity, Record};
use crate::services::{Query, SupabaseClient};

pub const SITE_NAME: &str = "Conglomerate Group";
const LATEST_NEWS_COUNT: u32 = 3;
const EXCERPT_CHARS: usize = 160;

/// Fetch `query` from `E`'s table; failures are logged and read as no rows.
pub async fn load<E: Entity>(backend: &SupabaseClient, query: Query) -> Vec<Record<E>> {
    match backend.select::<Record<E>>(E::TABLE, &query).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(table = E::TABLE, error = %e, "Content fetch failed, using fallback");
            Vec::new()
        }
    }
}

/// Active rows of `E` in display order.
async fn load_active<E: Entity>(backend: &SupabaseClient) -> Vec<Record<E>> {
    load::<E>(backend, E::ORDERING.apply(Query::new().flag("active"))).await
}

// ============================================================================
// Hero cards and slides
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeroCardView {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub route: String,
    pub images: [String; 3],
    pub fallbacks: Vec<String>,
    pub rotation_ms: u64,
}

pub struct HeroCardDefaults {
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
}

pub const HERO_CARD_DEFAULTS: HeroCardDefaults = HeroCardDefaults {
    title: SITE_NAME,
    description: "Discover more about this business.",
    route: "/",
};

impl ApplyDefaults for Record<HeroCard> {
    type Defaults = HeroCardDefaults;
    type Output = HeroCardView;

    fn apply_defaults(&self, defaults: &HeroCardDefaults) -> HeroCardView {
        // A blank title borrows the linked sector's copy
        let title = match self.route.as_deref() {
            Some(route) if !is_present(Some(&self.title)) && is_present(Some(route)) => {
                fallback_copy_for(route).title
            }
            _ => text_or(Some(self.title.as_str()), defaults.title),
        };
        let images = resolve_images(
            [
                self.primary_image.as_deref(),
                self.secondary_image.as_deref(),
                self.tertiary_image.as_deref(),
            ],
            &title,
        );
        HeroCardView {
            id: Some(self.id),
            rotation_ms: intervals::HERO_CARD.as_millis() as u64,
            description: text_or(self.description.as_deref(), defaults.description),
            route: text_or(self.route.as_deref(), defaults.route),
            fallbacks: fallback_chain(&images, &title),
            images,
            title,
        }
    }
}

/// Cards shown when the table has none.
const DEFAULT_HERO_CARD_ROUTES: &[&str] = &["/coffee", "/ceramic-tiles", "/bathroom"];

pub fn default_hero_cards() -> Vec<HeroCardView> {
    DEFAULT_HERO_CARD_ROUTES
        .iter()
        .map(|route| {
            let copy = fallback_copy_for(route);
            let images = resolve_images([None, None, None], &copy.title);
            HeroCardView {
                id: None,
                rotation_ms: intervals::HERO_CARD.as_millis() as u64,
                fallbacks: fallback_chain(&images, &copy.title),
                images,
                description: copy.description,
                title: copy.title,
                route: route.to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeroSlideView {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub images: [String; 3],
    pub fallbacks: Vec<String>,
    pub rotation_ms: u64,
}

pub struct HeroSlideDefaults {
    pub title: &'static str,
    pub button_text: &'static str,
    pub button_link: &'static str,
}

pub const HERO_SLIDE_DEFAULTS: HeroSlideDefaults = HeroSlideDefaults {
    title: SITE_NAME,
    button_text: "Learn More",
    button_link: "/about",
};

impl ApplyDefaults for Record<HeroSlide> {
    type Defaults = HeroSlideDefaults;
    type Output = HeroSlideView;

    fn apply_defaults(&self, defaults: &HeroSlideDefaults) -> HeroSlideView {
        let title = text_or(Some(self.title.as_str()), defaults.title);
        let images = resolve_images(
            [
                self.primary_image.as_deref(),
                self.secondary_image.as_deref(),
                self.tertiary_image.as_deref(),
            ],
            &title,
        );
        HeroSlideView {
            id: self.id,
            rotation_ms: intervals::HERO_SLIDE.as_millis() as u64,
            subtitle: text(self.subtitle.as_deref()),
            description: text(self.description.as_deref()),
            button_text: text_or(self.button_text.as_deref(), defaults.button_text),
            button_link: text_or(self.button_link.as_deref(), defaults.button_link),
            fallbacks: fallback_chain(&images, &title),
            images,
            title,
        }
    }
}

// ============================================================================
// Sectors, stats, testimonials
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectorCardView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub route: String,
    pub image: String,
    pub features: Vec<String>,
    pub rotation_ms: u64,
}

impl ApplyDefaults for Record<BusinessSector> {
    type Defaults = ();
    type Output = SectorCardView;

    fn apply_defaults(&self, _: &()) -> SectorCardView {
        let copy = fallback_copy_for(&self.route);
        let title = text_or(Some(self.title.as_str()), &copy.title);
        SectorCardView {
            id: self.id,
            description: text_or(self.description.as_deref(), &copy.description),
            route: self.route.clone(),
            image: text_or(self.image_url.as_deref(), placeholder_for(&title)),
            features: list_or(&self.features, &[]),
            rotation_ms: intervals::SECTOR_CARD.as_millis() as u64,
            title,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatView {
    pub label: String,
    pub value: String,
    pub icon: String,
}

const DEFAULT_STATS: &[(&str, &str, &str)] = &[
    ("Years of Experience", "25+", "calendar"),
    ("Business Sectors", "8", "briefcase"),
    ("Employees", "5,000+", "users"),
    ("Export Countries", "20+", "globe"),
];

fn stat_views(rows: &[Record<CompanyStat>]) -> Vec<StatView> {
    if rows.is_empty() {
        return DEFAULT_STATS
            .iter()
            .map(|(label, value, icon)| StatView {
                label: label.to_string(),
                value: value.to_string(),
                icon: icon.to_string(),
            })
            .collect();
    }

    rows.iter()
        .map(|s| StatView {
            label: s.label.trim().to_string(),
            value: s.value.trim().to_string(),
            icon: text_or(s.icon.as_deref(), "star"),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TestimonialView {
    pub name: String,
    pub company: String,
    pub quote: String,
    pub rating: i16,
}

fn testimonial_views(rows: &[Record<Testimonial>]) -> Vec<TestimonialView> {
    rows.iter()
        .map(|t| TestimonialView {
            name: t.name.trim().to_string(),
            company: text(t.company.as_deref()),
            quote: t.quote.trim().to_string(),
            rating: t.rating.clamp(0, crate::domain::company::MAX_RATING),
        })
        .collect()
}

// ============================================================================
// News
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsCardView {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub category: String,
    pub author: String,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsDetailView {
    #[serde(flatten)]
    pub card: NewsCardView,
    pub content: String,
}

pub struct NewsDefaults {
    pub category: &'static str,
    pub author: &'static str,
}

pub const NEWS_DEFAULTS: NewsDefaults = NewsDefaults {
    category: "Company News",
    author: "Communications Team",
};

impl ApplyDefaults for Record<NewsArticle> {
    type Defaults = NewsDefaults;
    type Output = NewsDetailView;

    fn apply_defaults(&self, defaults: &NewsDefaults) -> NewsDetailView {
        let content = text(self.content.as_deref());
        NewsDetailView {
            card: NewsCardView {
                id: self.id,
                title: self.title.trim().to_string(),
                excerpt: text_or(self.excerpt.as_deref(), &excerpt(&content, EXCERPT_CHARS)),
                image: text_or(self.image_url.as_deref(), placeholder_for("news")),
                category: text_or(self.category.as_deref(), defaults.category),
                author: text_or(self.author.as_deref(), defaults.author),
                published_at: self.published_at.or(self.created_at),
            },
            content,
        }
    }
}

fn published_news() -> Query {
    Query::new()
        .flag("published")
        .order_desc("published_at")
        .order_desc("created_at")
}

// ============================================================================
// People, CSR, careers, vision
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamMemberView {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image: String,
    pub email: String,
    pub linkedin_url: String,
}

impl ApplyDefaults for Record<TeamMember> {
    type Defaults = ();
    type Output = TeamMemberView;

    fn apply_defaults(&self, _: &()) -> TeamMemberView {
        TeamMemberView {
            id: self.id,
            name: self.name.trim().to_string(),
            position: self.position.trim().to_string(),
            bio: text(self.bio.as_deref()),
            image: text_or(self.image_url.as_deref(), GENERIC_PLACEHOLDER),
            email: text(self.email.as_deref()),
            linkedin_url: text(self.linkedin_url.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CsrView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl ApplyDefaults for Record<CsrContent> {
    type Defaults = ();
    type Output = CsrView;

    fn apply_defaults(&self, _: &()) -> CsrView {
        let title = self.title.trim().to_string();
        CsrView {
            id: self.id,
            description: text(self.description.as_deref()),
            image: text_or(self.image_url.as_deref(), placeholder_for(&title)),
            category: text_or(self.category.as_deref(), "Community"),
            title,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionView {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub salary_range: String,
    pub deadline: Option<NaiveDate>,
}

pub struct PositionDefaults {
    pub department: &'static str,
    pub location: &'static str,
    pub employment_type: &'static str,
    pub salary_range: &'static str,
}

pub const POSITION_DEFAULTS: PositionDefaults = PositionDefaults {
    department: "General",
    location: "Addis Ababa, Ethiopia",
    employment_type: "Full-time",
    salary_range: "Negotiable",
};

impl ApplyDefaults for Record<JobPosition> {
    type Defaults = PositionDefaults;
    type Output = PositionView;

    fn apply_defaults(&self, defaults: &PositionDefaults) -> PositionView {
        PositionView {
            id: self.id,
            title: self.title.trim().to_string(),
            department: text_or(self.department.as_deref(), defaults.department),
            location: text_or(self.location.as_deref(), defaults.location),
            employment_type: text_or(self.employment_type.as_deref(), defaults.employment_type),
            description: text(self.description.as_deref()),
            requirements: list_or(&self.requirements, &[]),
            responsibilities: list_or(&self.responsibilities, &[]),
            salary_range: text_or(self.salary_range.as_deref(), defaults.salary_range),
            deadline: self.deadline,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VisionMissionView {
    pub vision: String,
    pub mission: String,
    pub values: Vec<String>,
}

pub struct VisionMissionDefaults {
    pub vision: &'static str,
    pub mission: &'static str,
    pub values: &'static [&'static str],
}

pub const VISION_MISSION_DEFAULTS: VisionMissionDefaults = VisionMissionDefaults {
    vision: "To be a leading diversified business group in East Africa, creating lasting value for our communities.",
    mission: "To deliver quality products and services across our sectors through innovation, integrity and sustainable growth.",
    values: &["Integrity", "Quality", "Innovation", "Customer Focus", "Social Responsibility"],
};

impl ApplyDefaults for VisionMission {
    type Defaults = VisionMissionDefaults;
    type Output = VisionMissionView;

    fn apply_defaults(&self, defaults: &VisionMissionDefaults) -> VisionMissionView {
        VisionMissionView {
            vision: text_or(self.vision.as_deref(), defaults.vision),
            mission: text_or(self.mission.as_deref(), defaults.mission),
            values: list_or(&self.values, defaults.values),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeoView {
    pub page_path: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: String,
}

impl ApplyDefaults for SeoSetting {
    type Defaults = ();
    type Output = SeoView;

    fn apply_defaults(&self, _: &()) -> SeoView {
        SeoView {
            page_path: self.page_path.clone(),
            title: text_or(self.title.as_deref(), SITE_NAME),
            description: text_or(
                self.description.as_deref(),
                VISION_MISSION_DEFAULTS.mission,
            ),
            keywords: text(self.keywords.as_deref()),
            og_image: text_or(self.og_image.as_deref(), GENERIC_PLACEHOLDER),
        }
    }
}

// ============================================================================
// Page builders
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub slides: Vec<HeroSlideView>,
    pub hero_cards: Vec<HeroCardView>,
    pub sectors: Vec<SectorCardView>,
    pub stats: Vec<StatView>,
    pub latest_news: Vec<NewsCardView>,
    pub testimonials: Vec<TestimonialView>,
}

pub async fn home_page(backend: &SupabaseClient) -> HomePage {
    let (slides, cards, sectors, stats, news, testimonials) = tokio::join!(
        load_active::<HeroSlide>(backend),
        load_active::<HeroCard>(backend),
        load_active::<BusinessSector>(backend),
        load_active::<CompanyStat>(backend),
        load::<NewsArticle>(backend, published_news().limit(LATEST_NEWS_COUNT)),
        load_active::<Testimonial>(backend),
    );

    let hero_cards = if cards.is_empty() {
        default_hero_cards()
    } else {
        cards
            .iter()
            .map(|c| c.apply_defaults(&HERO_CARD_DEFAULTS))
            .collect()
    };

    HomePage {
        slides: slides
            .iter()
            .map(|s| s.apply_defaults(&HERO_SLIDE_DEFAULTS))
            .collect(),
        hero_cards,
        sectors: sectors.iter().map(|s| s.apply_defaults(&())).collect(),
        stats: stat_views(&stats),
        latest_news: news
            .iter()
            .map(|n| n.apply_defaults(&NEWS_DEFAULTS).card)
            .collect(),
        testimonials: testimonial_views(&testimonials),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub vision_mission: VisionMissionView,
    pub stats: Vec<StatView>,
    pub leadership: Vec<TeamMemberView>,
    pub sectors: Vec<SectorCardView>,
}

pub async fn about_page(backend: &SupabaseClient) -> AboutPage {
    let (vision, stats, team, sectors) = tokio::join!(
        vision_mission(backend),
        load_active::<CompanyStat>(backend),
        load_active::<TeamMember>(backend),
        load_active::<BusinessSector>(backend),
    );

    AboutPage {
        vision_mission: vision,
        stats: stat_views(&stats),
        leadership: team.iter().map(|m| m.apply_defaults(&())).collect(),
        sectors: sectors.iter().map(|s| s.apply_defaults(&())).collect(),
    }
}

pub async fn vision_mission(backend: &SupabaseClient) -> VisionMissionView {
    let rows = load::<VisionMission>(backend, VisionMission::ORDERING.apply(Query::new()).limit(1)).await;
    rows.into_iter()
        .next()
        .map(|r| r.fields)
        .unwrap_or_default()
        .apply_defaults(&VISION_MISSION_DEFAULTS)
}

pub async fn team_page(backend: &SupabaseClient) -> Vec<TeamMemberView> {
    load_active::<TeamMember>(backend)
        .await
        .iter()
        .map(|m| m.apply_defaults(&()))
        .collect()
}

pub async fn csr_page(backend: &SupabaseClient) -> Vec<CsrView> {
    load_active::<CsrContent>(backend)
        .await
        .iter()
        .map(|c| c.apply_defaults(&()))
        .collect()
}

pub async fn open_positions(backend: &SupabaseClient) -> Vec<PositionView> {
    load_active::<JobPosition>(backend)
        .await
        .iter()
        .map(|p| p.apply_defaults(&POSITION_DEFAULTS))
        .collect()
}

pub async fn testimonials_page(backend: &SupabaseClient) -> Vec<TestimonialView> {
    testimonial_views(&load_active::<Testimonial>(backend).await)
}

/// One page of published news, newest first, plus the total published count.
pub async fn news_list(
    backend: &SupabaseClient,
    offset: u64,
    limit: u32,
) -> (Vec<NewsCardView>, u64) {
    match backend
        .select_page::<Record<NewsArticle>>(NewsArticle::TABLE, &published_news(), offset, limit)
        .await
    {
        Ok((rows, total)) => (
            rows.iter()
                .map(|n| n.apply_defaults(&NEWS_DEFAULTS).card)
                .collect(),
            total,
        ),
        Err(e) => {
            tracing::warn!(error = %e, "News fetch failed, rendering empty list");
            (Vec::new(), 0)
        }
    }
}

/// A published article. `None` when missing, unpublished or unreachable.
pub async fn news_detail(backend: &SupabaseClient, id: Uuid) -> Option<NewsDetailView> {
    let query = Query::new().eq("id", id).flag("published");
    load::<NewsArticle>(backend, query)
        .await
        .first()
        .map(|n| n.apply_defaults(&NEWS_DEFAULTS))
}

/// Search metadata for a path, defaulted when no row exists.
pub async fn seo_for(backend: &SupabaseClient, path: &str) -> SeoView {
    let path = crate::domain::sectors::normalize_route(path);
    let query = Query::new().eq("page_path", &path);
    let setting = load::<SeoSetting>(backend, query)
        .await
        .into_iter()
        .next()
        .map(|r| r.fields)
        .unwrap_or(SeoSetting {
            page_path: path,
            title: None,
            description: None,
            keywords: None,
            og_image: None,
        });
    setting.apply_defaults(&())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn card(primary: &str, secondary: &str, tertiary: &str, title: &str) -> Record<HeroCard> {
        Record {
            id: Uuid::new_v4(),
            fields: HeroCard {
                title: title.to_string(),
                description: None,
                primary_image: Some(primary.to_string()),
                secondary_image: Some(secondary.to_string()),
                tertiary_image: Some(tertiary.to_string()),
                route: Some(" ".to_string()),
                order_index: 0,
                active: true,
            },
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn hero_card_defaults_fill_blank_fields() {
        let view = card("", "https://x/a.jpg", "", "Coffee").apply_defaults(&HERO_CARD_DEFAULTS);

        assert_eq!(view.images, ["https://x/a.jpg", "https://x/a.jpg", "https://x/a.jpg"].map(String::from));
        assert_eq!(view.description, HERO_CARD_DEFAULTS.description);
        assert_eq!(view.route, "/");
        assert_eq!(view.fallbacks[0], "https://x/a.jpg");
    }

    #[test]
    fn blank_tile_titles_get_a_heading() {
        let mut linked = card("", "", "", "  ");
        linked.fields.route = Some("/coffee".to_string());
        let view = linked.apply_defaults(&HERO_CARD_DEFAULTS);
        assert_eq!(view.title, "Ethiopian Coffee Export");
        assert_eq!(view.images[0], "/placeholders/agriculture.jpg");

        let unlinked = card("", "", "", "").apply_defaults(&HERO_CARD_DEFAULTS);
        assert_eq!(unlinked.title, SITE_NAME);

        let slide = Record {
            id: Uuid::new_v4(),
            fields: HeroSlide {
                title: " ".to_string(),
                subtitle: None,
                description: None,
                primary_image: None,
                secondary_image: None,
                tertiary_image: None,
                button_text: None,
                button_link: None,
                order_index: 0,
                active: true,
            },
            created_at: None,
            updated_at: None,
        }
        .apply_defaults(&HERO_SLIDE_DEFAULTS);
        assert_eq!(slide.title, SITE_NAME);
        assert_eq!(slide.button_text, "Learn More");
    }

    #[test]
    fn default_hero_cards_use_placeholders() {
        let cards = default_hero_cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "Ethiopian Coffee Export");
        assert_eq!(cards[0].images[0], "/placeholders/agriculture.jpg");
        assert_eq!(cards[2].images[2], "/placeholders/bathroom.jpg");
        assert!(cards.iter().all(|c| c.id.is_none()));
    }

    #[test]
    fn vision_mission_defaults_when_blank() {
        let view = VisionMission {
            vision: Some("".to_string()),
            mission: Some("Grow responsibly".to_string()),
            values: vec![],
        }
        .apply_defaults(&VISION_MISSION_DEFAULTS);

        assert_eq!(view.vision, VISION_MISSION_DEFAULTS.vision);
        assert_eq!(view.mission, "Grow responsibly");
        assert_eq!(view.values.len(), VISION_MISSION_DEFAULTS.values.len());
    }

    #[test]
    fn news_excerpt_derived_from_content() {
        let article = Record {
            id: Uuid::new_v4(),
            fields: NewsArticle {
                title: "Harvest".to_string(),
                excerpt: None,
                content: Some("The harvest season has begun.".to_string()),
                image_url: None,
                category: None,
                author: None,
                published: true,
                published_at: None,
            },
            created_at: None,
            updated_at: None,
        };

        let view = article.apply_defaults(&NEWS_DEFAULTS);
        assert_eq!(view.card.excerpt, "The harvest season has begun.");
        assert_eq!(view.card.image, "/placeholders/news.jpg");
        assert_eq!(view.card.author, "Communications Team");
    }

    #[test]
    fn empty_stats_fall_back_to_defaults() {
        let stats = stat_views(&[]);
        assert_eq!(stats.len(), DEFAULT_STATS.len());
        assert_eq!(stats[0].value, "25+");
    }

    #[tokio::test]
    async fn home_page_survives_backend_outage() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "message": "down" })))
            .mount(&server)
            .await;

        let backend = SupabaseClient::new(Client::new(), &server.uri(), "anon");
        let page = home_page(&backend).await;

        assert!(page.slides.is_empty());
        assert_eq!(page.hero_cards, default_hero_cards());
        assert_eq!(page.stats.len(), DEFAULT_STATS.len());
        assert!(page.latest_news.is_empty());
    }

    #[tokio::test]
    async fn home_page_uses_active_rows() {
        let server = MockServer::start().await;
        let card_id = Uuid::new_v4();

        Mock::given(method("GET"))
            .and(path("/rest/v1/hero_cards"))
            .and(query_param("active", "eq.true"))
            .and(query_param("order", "order_index.asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": card_id,
                "title": "Ceramic Tiles",
                "primary_image": "",
                "secondary_image": null,
                "tertiary_image": "",
                "route": "/ceramic-tiles",
                "order_index": 1,
                "active": true
            }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let backend = SupabaseClient::new(Client::new(), &server.uri(), "anon");
        let page = home_page(&backend).await;

        assert_eq!(page.hero_cards.len(), 1);
        let card = &page.hero_cards[0];
        assert_eq!(card.id, Some(card_id));
        assert_eq!(card.images[1], "/placeholders/ceramic-tiles.jpg");
        assert_eq!(card.route, "/ceramic-tiles");
    }

    #[tokio::test]
    async fn seo_defaults_for_unknown_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/seo_settings"))
            .and(query_param("page_path", "eq./careers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let backend = SupabaseClient::new(Client::new(), &server.uri(), "anon");
        let seo = seo_for(&backend, "careers").await;

        assert_eq!(seo.page_path, "/careers");
        assert_eq!(seo.title, SITE_NAME);
        assert_eq!(seo.keywords, "");
    }
}
