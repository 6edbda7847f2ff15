use uuid::Uuid;

use super::Claims;

/// Authenticated operator, built from a verified access token
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub role: Option<String>,

    /// Raw bearer token, forwarded on backend writes
    token: String,
    claims: Claims,
}

impl AuthContext {
    pub fn from_claims_with_token(claims: &Claims, token: &str) -> Result<Self, &'static str> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| "Invalid user ID in token")?;

        Ok(Self {
            user_id,
            email: claims.email.clone(),
            role: claims.role.clone(),
            token: token.to_string(),
            claims: claims.clone(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Whether the operator's email belongs to `domain` (case-insensitive).
    pub fn email_in_domain(&self, domain: &str) -> bool {
        self.email
            .as_deref()
            .and_then(|e| e.rsplit_once('@'))
            .is_some_and(|(_, d)| d.eq_ignore_ascii_case(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, email: Option<&str>) -> Claims {
        Claims {
            sub: sub.to_string(),
            aud: "authenticated".to_string(),
            iss: "issuer".to_string(),
            iat: 0,
            exp: 0,
            nbf: None,
            email: email.map(str::to_string),
            role: Some("authenticated".to_string()),
            session_id: None,
        }
    }

    #[test]
    fn rejects_non_uuid_subject() {
        assert!(AuthContext::from_claims_with_token(&claims("service", None), "t").is_err());
    }

    #[test]
    fn domain_match_ignores_case() {
        let id = Uuid::new_v4().to_string();
        let ctx = AuthContext::from_claims_with_token(&claims(&id, Some("Editor@Example.COM")), "t")
            .unwrap();
        assert!(ctx.email_in_domain("example.com"));
        assert!(!ctx.email_in_domain("other.com"));
        assert_eq!(ctx.token(), "t");

        let anonymous = AuthContext::from_claims_with_token(&claims(&id, None), "t").unwrap();
        assert!(!anonymous.email_in_domain("example.com"));
    }
}
