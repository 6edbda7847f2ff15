use anyhow::{Context, Result};
use std::env;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Hosted backend
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub backend_timeout_seconds: u64,

    // Backend auth (JWT verification for the admin console)
    pub supabase_jwt_jwks_url: String,
    pub supabase_jwt_issuer: String,
    pub supabase_jwt_audience: String,
    pub jwks_cache_ttl_seconds: u64,

    // Storage
    pub storage_bucket: String,
    pub max_upload_bytes: usize,

    // Admin console
    pub admin_email_domain: Option<String>,

    // Serverless functions
    pub hr_notify_function: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::parse(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Hosted backend
        let supabase_url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        Url::parse(&supabase_url).context("SUPABASE_URL is not a valid URL")?;
        let supabase_url = supabase_url.trim_end_matches('/').to_string();
        let supabase_anon_key =
            env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY must be set")?;
        let backend_timeout_seconds = env::var("BACKEND_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        // Backend auth
        let supabase_jwt_jwks_url = env::var("SUPABASE_JWT_JWKS_URL")
            .unwrap_or_else(|_| format!("{}/auth/v1/.well-known/jwks.json", supabase_url));
        let supabase_jwt_issuer = env::var("SUPABASE_JWT_ISSUER")
            .unwrap_or_else(|_| format!("{}/auth/v1", supabase_url));
        let supabase_jwt_audience =
            env::var("SUPABASE_JWT_AUDIENCE").unwrap_or_else(|_| "authenticated".to_string());
        let jwks_cache_ttl_seconds = env::var("JWKS_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1800); // 30 minutes default

        // Storage
        let storage_bucket =
            env::var("STORAGE_BUCKET").unwrap_or_else(|_| "content-images".to_string());
        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5 * 1024 * 1024);

        // Admin console
        let admin_email_domain = env::var("ADMIN_EMAIL_DOMAIN")
            .ok()
            .map(|s| s.trim().trim_start_matches('@').to_lowercase())
            .filter(|s| !s.is_empty());

        // Serverless functions
        let hr_notify_function = env::var("HR_NOTIFY_FUNCTION")
            .unwrap_or_else(|_| "send-application-email".to_string());

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            supabase_url,
            supabase_anon_key,
            backend_timeout_seconds,
            supabase_jwt_jwks_url,
            supabase_jwt_issuer,
            supabase_jwt_audience,
            jwks_cache_ttl_seconds,
            storage_bucket,
            max_upload_bytes,
            admin_email_domain,
            hr_notify_function,
        })
    }
}

#[cfg(test)]
impl Settings {
    /// Settings pointing at a local mock backend.
    pub fn for_backend(supabase_url: &str) -> Self {
        let supabase_url = supabase_url.trim_end_matches('/').to_string();
        Self {
            env: Environment::Dev,
            server_addr: "127.0.0.1:0".to_string(),
            cors_allow_origins: vec!["http://localhost:5173".to_string()],
            supabase_jwt_jwks_url: format!("{}/auth/v1/.well-known/jwks.json", supabase_url),
            supabase_jwt_issuer: format!("{}/auth/v1", supabase_url),
            supabase_jwt_audience: "authenticated".to_string(),
            jwks_cache_ttl_seconds: 1800,
            supabase_anon_key: "anon-key".to_string(),
            backend_timeout_seconds: 5,
            storage_bucket: "content-images".to_string(),
            max_upload_bytes: 1024,
            admin_email_domain: Some("example.com".to_string()),
            hr_notify_function: "send-application-email".to_string(),
            supabase_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing_defaults_to_dev() {
        assert_eq!(Environment::parse("production"), Environment::Prod);
        assert_eq!(Environment::parse("PROD"), Environment::Prod);
        assert_eq!(Environment::parse("staging"), Environment::Staging);
        assert_eq!(Environment::parse("anything"), Environment::Dev);
        assert!(Environment::parse("").is_dev());
    }
}
