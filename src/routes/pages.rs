//! Public page routes
//!
//! Every handler answers 200 with a fully defaulted page model, whatever the
//! backend does. The one exception is a news article that does not exist.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::pagination::{Paginated, PaginationParams};
use crate::api::response::DataResponse;
use crate::app::AppState;
use crate::content::pages;
use crate::content::resolver::{fallback_copy_for, resolve_sector_page};
use crate::error::ApiError;

/// GET /pages/home
pub async fn home(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(pages::home_page(&state.backend).await)
}

/// GET /pages/about
pub async fn about(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(pages::about_page(&state.backend).await)
}

/// GET /pages/sectors/:slug
pub async fn sector(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let fallback = fallback_copy_for(&slug);
    DataResponse::new(resolve_sector_page(&state.backend, &slug, &fallback).await)
}

/// GET /pages/news
pub async fn news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> impl IntoResponse {
    let (articles, total) =
        pages::news_list(&state.backend, params.offset(), params.limit()).await;
    Paginated::new(articles, &params, total)
}

/// GET /pages/news/:id
pub async fn news_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let article = pages::news_detail(&state.backend, id)
        .await
        .ok_or_else(|| ApiError::not_found("Article not found"))?;
    Ok(DataResponse::new(article))
}

/// GET /pages/team
pub async fn team(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(pages::team_page(&state.backend).await)
}

/// GET /pages/csr
pub async fn csr(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(pages::csr_page(&state.backend).await)
}

/// GET /pages/vision-mission
pub async fn vision_mission(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(pages::vision_mission(&state.backend).await)
}

/// GET /pages/open-positions
pub async fn open_positions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(pages::open_positions(&state.backend).await)
}

/// GET /pages/testimonials
pub async fn testimonials(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(pages::testimonials_page(&state.backend).await)
}

#[derive(Debug, Deserialize)]
pub struct SeoQuery {
    #[serde(default)]
    pub path: String,
}

/// GET /seo?path=/coffee
pub async fn seo(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeoQuery>,
) -> impl IntoResponse {
    DataResponse::new(pages::seo_for(&state.backend, &query.path).await)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::testing::{body_json, test_app};

    async fn get(server: &MockServer, uri: &str) -> (StatusCode, serde_json::Value) {
        let app = test_app(server).await;
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    #[tokio::test]
    async fn unknown_sector_renders_fallback_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/business_sectors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let (status, body) = get(&server, "/pages/sectors/coffee").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["kind"], "fallback");
        assert_eq!(body["data"]["hero"]["title"], "Ethiopian Coffee Export");
        assert_eq!(body["data"]["notice"]["title"], "Content Currently Unavailable");
    }

    #[tokio::test]
    async fn backend_outage_still_renders_sector_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/business_sectors"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (status, body) = get(&server, "/pages/sectors/avocado-oil").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["kind"], "fallback");
    }

    #[tokio::test]
    async fn public_reads_use_the_anon_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/team_members"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .and(query_param("active", "eq.true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": Uuid::new_v4(),
                "name": "Abebe Kebede",
                "position": "CEO",
                "bio": null,
                "image_url": "",
                "order_index": 0,
                "active": true
            }])))
            .mount(&server)
            .await;

        let (status, body) = get(&server, "/pages/team").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["name"], "Abebe Kebede");
        assert_eq!(body["data"][0]["bio"], "");
        assert_eq!(body["data"][0]["image"], "/placeholders/generic.jpg");
    }

    #[tokio::test]
    async fn news_list_is_paginated_from_content_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/news_articles"))
            .and(query_param("published", "eq.true"))
            .and(header("range", "10-19"))
            .respond_with(
                ResponseTemplate::new(206)
                    .insert_header("content-range", "10-10/11")
                    .set_body_json(json!([{
                        "id": Uuid::new_v4(),
                        "title": "Coffee exports rise",
                        "content": "Record season.",
                        "published": true
                    }])),
            )
            .mount(&server)
            .await;

        let (status, body) = get(&server, "/pages/news?page=2&per_page=10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["title"], "Coffee exports rise");
        assert_eq!(body["data"][0]["excerpt"], "Record season.");
        assert_eq!(body["pagination"]["total_items"], 11);
        assert_eq!(body["pagination"]["has_next"], false);
        assert_eq!(body["pagination"]["has_prev"], true);
    }

    #[tokio::test]
    async fn huge_page_number_renders_an_empty_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/news_articles"))
            .and(header("range", "85899345880-85899345899"))
            .respond_with(ResponseTemplate::new(416).insert_header("content-range", "*/3"))
            .mount(&server)
            .await;

        let (status, body) = get(&server, "/pages/news?page=4294967295").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["pagination"]["total_items"], 3);
        assert_eq!(body["pagination"]["has_next"], false);
    }

    #[tokio::test]
    async fn sector_row_with_null_columns_still_renders_authored_content() {
        let server = MockServer::start().await;
        let sector_id = Uuid::new_v4();
        Mock::given(method("GET"))
            .and(path("/rest/v1/business_sectors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": sector_id,
                "title": "Coffee",
                "description": null,
                "image_url": null,
                "features": null,
                "route": "/coffee",
                "order_index": null,
                "active": true
            }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/business_content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": Uuid::new_v4(),
                "sector_id": sector_id,
                "hero": { "title": "Authored hero" },
                "features": { "title": "Why us", "items": null },
                "gallery": null
            }])))
            .mount(&server)
            .await;

        let (status, body) = get(&server, "/pages/sectors/coffee").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["kind"], "authored");
        assert_eq!(body["data"]["hero"]["title"], "Authored hero");
    }

    #[tokio::test]
    async fn missing_article_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/news_articles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let uri = format!("/pages/news/{}", Uuid::new_v4());
        let (status, body) = get(&server, &uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }
}
