//! Authentication provider seam

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tokio::sync::broadcast;
use tracing::debug;

use crate::{
    config::Config,
    error::AppResult,
    models::{Session, SessionUser},
    services::AuthService,
};

/// Capacity of the session event channel
const SESSION_EVENT_CAPACITY: usize = 16;

/// What happened to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionChange {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// A session change, stamped with when it was observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub change: SessionChange,
    pub session: Option<Session>,
    pub observed_at: DateTime<Utc>,
}

/// Where to send the user to start an OAuth sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OAuthRedirect {
    pub provider: String,
    pub url: String,
    pub state: String,
}

/// Session and sign-in operations of the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The current session, if any
    async fn get_session(&self) -> AppResult<Option<Session>>;

    /// Session change notifications from now on
    fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;

    async fn sign_up(&self, email: &str, password: &str, username: &str) -> AppResult<SessionUser>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<Session>;

    async fn sign_in_with_oauth(&self, provider: &str) -> AppResult<OAuthRedirect>;

    async fn sign_out(&self) -> AppResult<()>;
}

/// In-process provider backed by the user tables
pub struct PgAuthClient {
    pool: PgPool,
    config: Config,
    current: RwLock<Option<Session>>,
    events: broadcast::Sender<SessionEvent>,
}

impl PgAuthClient {
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self::with_session(pool, config, None)
    }

    /// Client that starts out holding an existing session
    pub fn with_session(pool: PgPool, config: Config, session: Option<Session>) -> Self {
        let (events, _) = broadcast::channel(SESSION_EVENT_CAPACITY);
        Self {
            pool,
            config,
            current: RwLock::new(session),
            events,
        }
    }

    /// Issue a fresh token for the signed-in user
    pub async fn refresh_session(&self) -> AppResult<Option<Session>> {
        let Some(session) = self.current_session() else {
            return Ok(None);
        };

        let refreshed = AuthService::refresh(&self.pool, &self.config, &session.user.id).await?;
        self.replace(Some(refreshed.clone()), SessionChange::TokenRefreshed);
        Ok(Some(refreshed))
    }

    fn current_session(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn replace(&self, session: Option<Session>, change: SessionChange) {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = session.clone();

        let event = SessionEvent {
            change,
            session,
            observed_at: Utc::now(),
        };
        // No subscribers is fine
        if self.events.send(event).is_err() {
            debug!(change = ?change, "Session change with no subscribers");
        }
    }
}

#[async_trait]
impl AuthProvider for PgAuthClient {
    async fn get_session(&self) -> AppResult<Option<Session>> {
        Ok(self
            .current_session()
            .filter(|session| session.expires_at > Utc::now()))
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str, username: &str) -> AppResult<SessionUser> {
        let user = AuthService::register(&self.pool, username, email, password).await?;
        Ok(SessionUser {
            id: user.id,
            email: user.email,
            username: user.username,
        })
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<Session> {
        let session = AuthService::login(&self.pool, &self.config, email, password).await?;
        self.replace(Some(session.clone()), SessionChange::SignedIn);
        Ok(session)
    }

    async fn sign_in_with_oauth(&self, provider: &str) -> AppResult<OAuthRedirect> {
        AuthService::oauth_redirect(&self.config.oauth, provider)
    }

    async fn sign_out(&self) -> AppResult<()> {
        self.replace(None, SessionChange::SignedOut);
        Ok(())
    }
}
