//! Admin console API
//!
//! Every route here requires a signed-in operator (see [`crate::auth::RequireAuth`]).

pub mod content;
pub mod crud;
pub mod uploads;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;
use crate::domain::careers::{JobApplication, JobPosition};
use crate::domain::company::{CompanyStat, CsrContent, Testimonial, VisionMission};
use crate::domain::hero::{HeroCard, HeroSlide};
use crate::domain::news::NewsArticle;
use crate::domain::sectors::BusinessSector;
use crate::domain::seo::SeoSetting;
use crate::domain::team::TeamMember;
use crate::domain::Entity;

/// List/create at `/admin/<name>`, read/update/delete at `/admin/<name>/:id`.
fn entity_routes<E: Entity>(router: Router<Arc<AppState>>, name: &str) -> Router<Arc<AppState>> {
    router
        .route(
            &format!("/admin/{}", name),
            get(crud::list::<E>).post(crud::create::<E>),
        )
        .route(
            &format!("/admin/{}/:id", name),
            get(crud::get::<E>)
                .put(crud::update::<E>)
                .delete(crud::remove::<E>),
        )
}

pub fn admin_router() -> Router<Arc<AppState>> {
    let router = Router::new()
        .route("/admin/session", get(super::session::get_session))
        .route("/admin/uploads", post(uploads::upload))
        .route(
            "/admin/sectors/:id/content",
            get(content::get_content).put(content::put_content),
        );

    let router = entity_routes::<BusinessSector>(router, "sectors");
    let router = entity_routes::<HeroCard>(router, "hero-cards");
    let router = entity_routes::<HeroSlide>(router, "hero-slides");
    let router = entity_routes::<NewsArticle>(router, "news");
    let router = entity_routes::<TeamMember>(router, "team");
    let router = entity_routes::<JobPosition>(router, "positions");
    let router = entity_routes::<JobApplication>(router, "applications");
    let router = entity_routes::<CompanyStat>(router, "stats");
    let router = entity_routes::<CsrContent>(router, "csr");
    let router = entity_routes::<VisionMission>(router, "vision-mission");
    let router = entity_routes::<SeoSetting>(router, "seo");
    entity_routes::<Testimonial>(router, "testimonials")
}
