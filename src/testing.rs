//! Fixtures shared by router and auth tests: a local signing key whose public
//! half is served as the mock backend's JWKS.

use axum::Router;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::app::{create_app, AppState};
use crate::auth::Claims;
use crate::config::Settings;

const JWKS_JSON: &str = include_str!("testdata/test_jwks.json");
const SIGNING_KEY_PEM: &[u8] = include_bytes!("testdata/test_rsa.pem");
const SIGNING_KID: &str = "test-key";

pub fn test_claims(backend_url: &str, email: Option<&str>) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        sub: Uuid::new_v4().to_string(),
        aud: "authenticated".to_string(),
        iss: format!("{}/auth/v1", backend_url.trim_end_matches('/')),
        iat: now,
        exp: now + 3600,
        nbf: None,
        email: email.map(str::to_string),
        role: Some("authenticated".to_string()),
        session_id: None,
    }
}

pub fn sign_token(claims: &Claims) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(SIGNING_KID.to_string());
    let key = EncodingKey::from_rsa_pem(SIGNING_KEY_PEM).expect("test signing key");
    encode(&header, claims, &key).expect("sign test token")
}

pub async fn mount_jwks(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(JWKS_JSON, "application/json"))
        .mount(server)
        .await;
}

/// Router wired to `server` as its hosted backend, with the JWKS mounted.
pub async fn test_app(server: &MockServer) -> Router {
    mount_jwks(server).await;
    create_app(AppState::from_settings(Settings::for_backend(&server.uri())).expect("state"))
}

/// Bearer token for an operator at `email`, valid against `server`'s JWKS.
pub fn operator_token(server: &MockServer, email: &str) -> String {
    sign_token(&test_claims(&server.uri(), Some(email)))
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

