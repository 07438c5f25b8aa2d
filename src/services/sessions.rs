//! Patron sessions: login, token validation and logout

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{patron::Patron, session::SessionClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct SessionsService {
    repository: Repository,
    config: AuthConfig,
    /// Revoked token ids, mapped to the last instant their token would still validate
    revoked: Arc<RwLock<HashMap<Uuid, i64>>>,
}

impl SessionsService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self {
            repository,
            config,
            revoked: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Check a (name, card number) pair and open a session for it.
    ///
    /// Returns `None` when no patron holds exactly that pair.
    pub async fn login(&self, name: &str, card_num: i64) -> AppResult<Option<(String, Patron)>> {
        let Some(patron) = self
            .repository
            .patrons
            .find_by_credentials(name, card_num)
            .await?
        else {
            tracing::info!(card_num, "Login rejected");
            return Ok(None);
        };

        let token = self.issue_token(&patron)?;
        tracing::info!(card_num, "Patron logged in");
        Ok(Some((token, patron)))
    }

    /// Sign a token for a patron
    pub fn issue_token(&self, patron: &Patron) -> AppResult<String> {
        SessionClaims::for_patron(patron, self.config.jwt_expiration_hours)
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Decode a bearer token and make sure it has not been logged out
    pub fn authenticate(&self, token: &str) -> AppResult<SessionClaims> {
        let claims = SessionClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        let revoked = self
            .revoked
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if revoked.contains_key(&claims.jti) {
            return Err(AppError::Authentication("Session has been logged out".to_string()));
        }

        Ok(claims)
    }

    /// End a session. Its token is refused from now until it can no longer validate.
    pub fn logout(&self, claims: &SessionClaims) {
        let now = Utc::now().timestamp();
        let mut revoked = self
            .revoked
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        revoked.retain(|_, until| *until >= now);
        revoked.insert(claims.jti, claims.accepted_until());

        tracing::info!(card_num = claims.card_num, "Patron logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    fn service() -> SessionsService {
        // Token handling never touches the database
        let pool = SqlitePoolOptions::new()
            .connect_lazy("sqlite::memory:")
            .unwrap();
        SessionsService::new(Repository::new(pool), AuthConfig::default())
    }

    fn bob() -> Patron {
        Patron {
            card_num: 17,
            name: "Bob".to_string(),
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates() {
        let sessions = service();
        let token = sessions.issue_token(&bob()).unwrap();

        let claims = sessions.authenticate(&token).unwrap();
        assert_eq!(claims.card_num, 17);
        assert_eq!(claims.sub, "Bob");
    }

    #[tokio::test]
    async fn logged_out_token_is_refused() {
        let sessions = service();
        let token = sessions.issue_token(&bob()).unwrap();
        let claims = sessions.authenticate(&token).unwrap();

        sessions.logout(&claims);

        assert!(matches!(
            sessions.authenticate(&token),
            Err(AppError::Authentication(_))
        ));
    }

    #[tokio::test]
    async fn logout_leaves_other_sessions_alone() {
        let sessions = service();
        let first = sessions.issue_token(&bob()).unwrap();
        let second = sessions.issue_token(&bob()).unwrap();

        sessions.logout(&sessions.authenticate(&first).unwrap());

        assert!(sessions.authenticate(&second).is_ok());
    }

    #[tokio::test]
    async fn logout_prunes_expired_revocations() {
        let sessions = service();
        let stale = Uuid::new_v4();
        sessions
            .revoked
            .write()
            .unwrap()
            .insert(stale, Utc::now().timestamp() - 10);

        let token = sessions.issue_token(&bob()).unwrap();
        sessions.logout(&sessions.authenticate(&token).unwrap());

        let revoked = sessions.revoked.read().unwrap();
        assert!(!revoked.contains_key(&stale));
        assert_eq!(revoked.len(), 1);
    }

    #[tokio::test]
    async fn token_logged_out_near_expiry_stays_refused() {
        let sessions = service();
        let config = AuthConfig::default();

        // Past exp, but still inside the validation leeway
        let mut claims = SessionClaims::for_patron(&bob(), 1);
        claims.exp = Utc::now().timestamp() - 5;
        let expiring = claims.create_token(&config.jwt_secret).unwrap();
        sessions.logout(&sessions.authenticate(&expiring).unwrap());

        // A later logout prunes the revocation list
        let other = sessions.issue_token(&bob()).unwrap();
        sessions.logout(&sessions.authenticate(&other).unwrap());

        assert!(matches!(
            sessions.authenticate(&expiring),
            Err(AppError::Authentication(_))
        ));
    }

    #[tokio::test]
    async fn garbage_token_is_an_authentication_error() {
        assert!(matches!(
            service().authenticate("not-a-token"),
            Err(AppError::Authentication(_))
        ));
    }
}
