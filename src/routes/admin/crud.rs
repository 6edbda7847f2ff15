//! Generic admin CRUD over any content [`Entity`]
//!
//! Writes carry the whole row and go out under the operator's token, so the
//! backend's row policies decide what the operator may change.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::pagination::{Paginated, PaginationParams};
use crate::api::response::{Created, DataResponse, NoContent};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::{Entity, Record};
use crate::error::ApiError;
use crate::services::{self, SupabaseClient};

/// Backend handle acting as the signed-in operator.
pub(super) fn operator_backend(state: &AppState, auth: &RequireAuth) -> SupabaseClient {
    state.backend.with_token(auth.token())
}

/// GET /admin/<entity>
pub async fn list<E: Entity>(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Query(params): Query<PaginationParams>,
) -> Result<Paginated<Record<E>>, ApiError> {
    let query = E::ORDERING.apply(services::Query::new());
    let (rows, total) = operator_backend(&state, &auth)
        .select_page::<Record<E>>(E::TABLE, &query, params.offset(), params.limit())
        .await?;

    Ok(Paginated::new(rows, &params, total))
}

/// GET /admin/<entity>/:id
pub async fn get<E: Entity>(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = operator_backend(&state, &auth)
        .select_one::<Record<E>>(E::TABLE, &services::Query::new().eq("id", id))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No {} row with id {}", E::TABLE, id)))?;

    Ok(DataResponse::new(row))
}

/// POST /admin/<entity>
pub async fn create<E: Entity>(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Json(mut row): Json<E>,
) -> Result<impl IntoResponse, ApiError> {
    row.validate()?;

    let created: Record<E> = operator_backend(&state, &auth)
        .insert(E::TABLE, &row)
        .await?;

    tracing::info!(table = E::TABLE, id = %created.id, user_id = %auth.user_id, "Row created");
    Ok(Created(DataResponse::new(created)))
}

/// PUT /admin/<entity>/:id
pub async fn update<E: Entity>(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Path(id): Path<Uuid>,
    Json(mut row): Json<E>,
) -> Result<impl IntoResponse, ApiError> {
    row.validate()?;

    let updated: Record<E> = operator_backend(&state, &auth)
        .update(E::TABLE, id, &row)
        .await?;

    tracing::info!(table = E::TABLE, id = %id, user_id = %auth.user_id, "Row updated");
    Ok(DataResponse::new(updated))
}

/// DELETE /admin/<entity>/:id
pub async fn remove<E: Entity>(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Path(id): Path<Uuid>,
) -> Result<NoContent, ApiError> {
    operator_backend(&state, &auth).delete(E::TABLE, id).await?;

    tracing::info!(table = E::TABLE, id = %id, user_id = %auth.user_id, "Row deleted");
    Ok(NoContent)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode, Router};
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::testing::{body_json as response_json, operator_token, test_app};

    struct Console {
        app: Router,
        token: String,
    }

    impl Console {
        async fn new(server: &MockServer) -> Self {
            Self {
                app: test_app(server).await,
                token: operator_token(server, "editor@example.com"),
            }
        }

        async fn send(
            &self,
            method: &str,
            uri: &str,
            body: Option<serde_json::Value>,
        ) -> axum::response::Response {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .header("authorization", format!("Bearer {}", self.token))
                .header("content-type", "application/json")
                .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
                .unwrap();
            self.app.clone().oneshot(request).await.unwrap()
        }
    }

    fn sector_body() -> serde_json::Value {
        json!({
            "title": "Ethiopian Coffee Export",
            "description": "Specialty coffee from Sidamo and Yirgacheffe.",
            "image_url": "https://cdn.example.com/coffee.jpg",
            "features": ["Washed", "Natural"],
            "route": "/coffee",
            "order_index": 1,
            "active": true
        })
    }

    #[tokio::test]
    async fn fully_populated_save_is_sent_unchanged() {
        let server = MockServer::start().await;
        let console = Console::new(&server).await;
        let id = Uuid::new_v4();

        let mut stored = sector_body();
        stored["id"] = json!(id);

        Mock::given(method("PATCH"))
            .and(path("/rest/v1/business_sectors"))
            .and(query_param("id", format!("eq.{}", id).as_str()))
            .and(header("authorization", format!("Bearer {}", console.token).as_str()))
            .and(body_json(sector_body()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored.clone()])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/business_sectors"))
            .and(query_param("id", format!("eq.{}", id).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored.clone()])))
            .mount(&server)
            .await;

        let response = console
            .send("PUT", &format!("/admin/sectors/{}", id), Some(sector_body()))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let saved = response_json(response).await;

        let response = console.send("GET", &format!("/admin/sectors/{}", id), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let refetched = response_json(response).await;

        assert_eq!(saved["data"], stored);
        assert_eq!(refetched["data"], saved["data"]);
    }

    #[tokio::test]
    async fn create_normalizes_then_inserts() {
        let server = MockServer::start().await;
        let console = Console::new(&server).await;

        let mut expected = sector_body();
        expected["route"] = json!("/coffee");
        let mut stored = expected.clone();
        stored["id"] = json!(Uuid::new_v4());

        Mock::given(method("POST"))
            .and(path("/rest/v1/business_sectors"))
            .and(header("prefer", "return=representation"))
            .and(body_json(expected))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([stored])))
            .expect(1)
            .mount(&server)
            .await;

        let mut body = sector_body();
        body["route"] = json!("coffee/");
        let response = console.send("POST", "/admin/sectors", Some(body)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let created = response_json(response).await;
        assert_eq!(created["data"]["route"], "/coffee");
    }

    #[tokio::test]
    async fn blank_required_field_is_rejected() {
        let server = MockServer::start().await;
        let console = Console::new(&server).await;

        let response = console
            .send(
                "POST",
                "/admin/team",
                Some(json!({ "name": "  ", "position": "CFO" })),
            )
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(server.received_requests().await.unwrap().iter().all(|r| r.url.path() != "/rest/v1/team_members"));
    }

    #[tokio::test]
    async fn list_is_paginated_and_ordered() {
        let server = MockServer::start().await;
        let console = Console::new(&server).await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/hero_cards"))
            .and(query_param("order", "order_index.asc"))
            .and(header("range", "0-19"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-range", "0-0/1")
                    .set_body_json(json!([{
                        "id": Uuid::new_v4(),
                        "title": "Coffee",
                        "order_index": 0,
                        "active": false
                    }])),
            )
            .mount(&server)
            .await;

        let response = console.send("GET", "/admin/hero-cards", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["data"][0]["title"], "Coffee");
        assert_eq!(body["data"][0]["active"], false);
        assert_eq!(body["pagination"]["total_items"], 1);
    }

    #[tokio::test]
    async fn backend_policy_rejection_surfaces_as_forbidden() {
        let server = MockServer::start().await;
        let console = Console::new(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/rest/v1/news_articles"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "message": "new row violates row-level security policy"
            })))
            .mount(&server)
            .await;

        let response = console
            .send("DELETE", &format!("/admin/news/{}", Uuid::new_v4()), None)
            .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = response_json(response).await;
        assert_eq!(body["message"], "new row violates row-level security policy");
    }

    #[tokio::test]
    async fn writes_require_a_token() {
        let server = MockServer::start().await;
        let app = test_app(&server).await;

        let response = app
            .oneshot(
                Request::delete(format!("/admin/news/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
