pub mod admin;
pub mod auth;
pub mod careers;
pub mod health;
pub mod pages;
pub mod rotation;
pub mod session;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        // Pages
        .route("/pages/home", get(pages::home))
        .route("/pages/about", get(pages::about))
        .route("/pages/sectors/:slug", get(pages::sector))
        .route("/pages/news", get(pages::news))
        .route("/pages/news/:id", get(pages::news_article))
        .route("/pages/team", get(pages::team))
        .route("/pages/csr", get(pages::csr))
        .route("/pages/vision-mission", get(pages::vision_mission))
        .route("/pages/open-positions", get(pages::open_positions))
        .route("/pages/testimonials", get(pages::testimonials))
        .route("/seo", get(pages::seo))
        // Careers
        .route("/careers/applications", post(careers::submit_application))
        // Image rotation feeds (SSE)
        .route("/hero-cards/:id/rotation", get(rotation::hero_card_rotation))
        .route("/hero-slides/:id/rotation", get(rotation::hero_slide_rotation))
        // Auth proxy
        .route("/auth/signin", post(auth::sign_in))
        .route("/auth/signout", post(auth::sign_out))
        .route("/auth/refresh", post(auth::refresh_token))
        // Admin console
        .merge(admin::admin_router())
}
