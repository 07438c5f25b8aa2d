//! Session token claims

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::patron::Patron;

/// Seconds a token is still accepted past its `exp`
pub const TOKEN_LEEWAY_SECS: u64 = 60;

/// Upper bound on a session lifetime, whatever the configuration asks for
pub const MAX_SESSION_HOURS: u64 = 24 * 366;

/// JWT claims identifying the patron behind a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Patron name
    pub sub: String,
    pub card_num: i64,
    /// Token id, used to revoke the session on logout
    pub jti: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    /// Claims for a fresh session that expires after `ttl_hours`,
    /// capped at [`MAX_SESSION_HOURS`]
    pub fn for_patron(patron: &Patron, ttl_hours: u64) -> Self {
        let now = Utc::now().timestamp();
        let ttl_secs = ttl_hours.min(MAX_SESSION_HOURS) as i64 * 3600;
        Self {
            sub: patron.name.clone(),
            card_num: patron.card_num,
            jti: Uuid::new_v4(),
            exp: now.saturating_add(ttl_secs),
            iat: now,
        }
    }

    /// Last instant at which this token can still pass validation
    pub fn accepted_until(&self) -> i64 {
        self.exp.saturating_add(TOKEN_LEEWAY_SECS as i64)
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let mut validation = Validation::default();
        validation.leeway = TOKEN_LEEWAY_SECS;
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?;
        Ok(token_data.claims)
    }
}
