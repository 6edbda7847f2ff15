use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::auth::JwksCache;
use crate::config::Settings;
use crate::middleware::request_id::{request_id_layer, X_REQUEST_ID};
use crate::routes;
use crate::services::SupabaseClient;

/// Multipart framing on top of the upload cap
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    /// Anonymous-key client; admin handlers derive a per-operator copy with `with_token`
    pub backend: SupabaseClient,
    pub jwks_cache: JwksCache,
    /// Shared HTTP client for the auth proxy and JWKS fetches
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(
        settings: Settings,
        backend: SupabaseClient,
        jwks_cache: JwksCache,
        http_client: reqwest::Client,
    ) -> Arc<Self> {
        Arc::new(Self {
            settings,
            backend,
            jwks_cache,
            http_client,
        })
    }

    /// Build the HTTP client, backend handle and JWKS cache from settings.
    pub fn from_settings(settings: Settings) -> Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.backend_timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        let backend = SupabaseClient::new(
            http_client.clone(),
            &settings.supabase_url,
            &settings.supabase_anon_key,
        );

        let jwks_cache = JwksCache::new(
            http_client.clone(),
            settings.supabase_jwt_jwks_url.clone(),
            settings.supabase_jwt_issuer.clone(),
            settings.supabase_jwt_audience.clone(),
            settings.jwks_cache_ttl_seconds,
        );

        Ok(Self::new(settings, backend, jwks_cache, http_client))
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.settings);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    let (set_request_id, propagate_request_id) = request_id_layer();

    Router::new()
        .merge(routes::api_router())
        .layer(DefaultBodyLimit::max(
            state.settings.max_upload_bytes + UPLOAD_OVERHEAD_BYTES,
        ))
        // Middleware stack (applied bottom-up)
        .layer(propagate_request_id)
        .layer(trace_layer)
        .layer(set_request_id)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let max_age = if settings.env.is_dev() {
        Duration::from_secs(86400)
    } else {
        Duration::from_secs(3600)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::HeaderName::from_static(X_REQUEST_ID),
            axum::http::header::CACHE_CONTROL,
        ]))
        .allow_credentials(true)
        .max_age(max_age)
}
