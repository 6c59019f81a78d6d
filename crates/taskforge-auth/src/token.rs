//! Bearer-token issuance and verification (HS256).
//!
//! Tokens carry the username as the JWT subject plus an expiry; nothing
//! else. The service holds the derived keys and TTL, constructed once at
//! startup from the application config.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::errors::{AuthError, Result};

/// JWT claims for an access token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Token subject — the username.
    pub sub: String,
    /// Expiry as a Unix timestamp (seconds).
    pub exp: i64,
}

/// Issues and verifies HS256 bearer tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expire_minutes: i64,
}

impl TokenService {
    /// Create a token service from a shared secret and a TTL in minutes.
    #[must_use]
    pub fn new(secret: &str, expire_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expire_minutes,
        }
    }

    /// Issue a token for the given subject.
    pub fn issue(&self, subject: &str) -> Result<String> {
        let exp = (Utc::now() + chrono::Duration::minutes(self.expire_minutes)).timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            exp,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenEncoding(e.to_string()))
    }

    /// Verify a token and return its subject.
    ///
    /// Expired, malformed, and wrongly-signed tokens all come back as
    /// [`AuthError::InvalidToken`] — callers treat them uniformly as 401.
    pub fn verify(&self, token: &str) -> Result<String> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        Ok(data.claims.sub)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_returns_subject() {
        let svc = TokenService::new("test-secret", 30);
        let token = svc.issue("alice").unwrap();
        assert_eq!(svc.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn malformed_token_rejected() {
        let svc = TokenService::new("test-secret", 30);
        let err = svc.verify("not.a.token").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn wrong_secret_rejected() {
        let issuer = TokenService::new("secret-a", 30);
        let verifier = TokenService::new("secret-b", 30);
        let token = issuer.issue("alice").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn expired_token_rejected() {
        // Expiry far enough in the past to clear the default leeway.
        let svc = TokenService::new("test-secret", -5);
        let token = svc.issue("alice").unwrap();
        let err = svc.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn tampered_token_rejected() {
        let svc = TokenService::new("test-secret", 30);
        let token = svc.issue("alice").unwrap();
        let mut tampered = token.clone();
        tampered.replace_range(0..1, if token.starts_with('A') { "B" } else { "A" });
        assert!(svc.verify(&tampered).is_err());
    }
}
