//! Authentication routes
//!
//! The admin console signs in through these; each call is proxied to the hosted
//! backend's auth API.

use axum::{extract::State, response::IntoResponse, Json};
use reqwest::Response;
use std::sync::Arc;

use crate::api::response::{DataResponse, NoContent};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::auth::{
    AuthResponse, RefreshTokenRequest, SignInRequest, SupabaseAuthResponse, SupabaseErrorResponse,
};
use crate::error::ApiError;

fn auth_url(state: &AppState, path: &str) -> String {
    format!("{}/auth/v1/{}", state.settings.supabase_url, path)
}

/// Exchange a token-endpoint response for tokens, or a 401 carrying the backend's message.
async fn token_response(response: Response) -> Result<AuthResponse, ApiError> {
    if !response.status().is_success() {
        let error: SupabaseErrorResponse = response.json().await.unwrap_or_default();
        return Err(ApiError::unauthorized(error.get_message()));
    }

    let auth_response: SupabaseAuthResponse = response
        .json()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to parse auth response: {}", e)))?;

    Ok(AuthResponse {
        access_token: auth_response.access_token,
        refresh_token: auth_response.refresh_token,
        expires_in: auth_response.expires_in,
        user: auth_response.user.into(),
    })
}

/// POST /auth/signin
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state
        .http_client
        .post(auth_url(&state, "token"))
        .query(&[("grant_type", "password")])
        .header("apikey", &state.settings.supabase_anon_key)
        .json(&serde_json::json!({
            "email": req.email.trim(),
            "password": req.password
        }))
        .send()
        .await
        .map_err(|e| ApiError::Upstream(format!("Failed to connect to auth service: {}", e)))?;

    let auth = token_response(response).await?;
    tracing::info!(user_id = %auth.user.id, "Operator signed in");

    Ok(DataResponse::new(auth))
}

/// POST /auth/signout
///
/// The local session ends regardless of what the backend answers.
pub async fn sign_out(State(state): State<Arc<AppState>>, auth: RequireAuth) -> NoContent {
    let result = state
        .http_client
        .post(auth_url(&state, "logout"))
        .header("apikey", &state.settings.supabase_anon_key)
        .bearer_auth(auth.token())
        .send()
        .await;

    if let Err(e) = result {
        tracing::warn!(user_id = %auth.user_id, error = %e, "Backend sign-out failed");
    }

    NoContent
}

/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state
        .http_client
        .post(auth_url(&state, "token"))
        .query(&[("grant_type", "refresh_token")])
        .header("apikey", &state.settings.supabase_anon_key)
        .json(&serde_json::json!({ "refresh_token": req.refresh_token }))
        .send()
        .await
        .map_err(|e| ApiError::Upstream(format!("Failed to connect to auth service: {}", e)))?;

    Ok(DataResponse::new(token_response(response).await?))
}
