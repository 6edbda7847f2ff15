use serde::{Deserialize, Serialize};

/// Access-token claims issued by the backend's auth service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Operator id
    pub sub: String,
    pub aud: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,

    #[serde(default)]
    pub nbf: Option<i64>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub session_id: Option<String>,
}
