//! Authentication domain types
//!
//! Requests and responses for the admin console's sign-in flow, which is proxied
//! to the hosted backend's auth API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Operator account as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Auth response with tokens
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: User,
}

/// Current admin session, with the advisory domain banner when it applies
#[derive(Debug, Clone, Serialize)]
pub struct AdminSessionResponse {
    pub user: User,
    pub expires_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_notice: Option<String>,
}

// Backend auth API response types

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseAuthResponse {
    pub access_token: String,
    #[allow(dead_code)]
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: SupabaseUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseUser {
    pub id: String,
    pub email: Option<String>,
    pub created_at: Option<String>,
}

/// Error body; newer and legacy field names both occur
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseErrorResponse {
    pub msg: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub message: Option<String>,
}

impl SupabaseErrorResponse {
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown authentication error".to_string())
    }
}

impl From<SupabaseUser> for User {
    fn from(su: SupabaseUser) -> Self {
        Self {
            id: su.id,
            email: su.email,
            created_at: su.created_at.and_then(|s| s.parse().ok()),
        }
    }
}
